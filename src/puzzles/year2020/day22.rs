//! Crab Combat: a card game and its recursive variant

use std::collections::{HashSet, VecDeque};

use crate::io::error::{Result, invalid_input, parse_error};
use crate::io::input::{blocks, lines, parse_number};
use crate::puzzles::answer::Answers;

/// A deck, top card first
pub type Deck = VecDeque<u32>;

/// Which player won a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// The first listed player
    One,
    /// The second listed player
    Two,
}

fn parse_deck(block: &str) -> Result<Deck> {
    let mut rows = lines(block);
    let header = rows.next().unwrap_or_default();
    if !header.starts_with("Player") {
        return Err(parse_error(header, &"expected a 'Player N:' header"));
    }
    rows.map(|line| parse_number(line, line)).collect()
}

/// Parse the two player sections
///
/// # Errors
///
/// Returns an error unless there are exactly two well-formed decks
pub fn parse(text: &str) -> Result<(Deck, Deck)> {
    let sections = blocks(text);
    let [first, second] = sections.as_slice() else {
        return Err(invalid_input(&format!(
            "expected 2 decks, found {}",
            sections.len()
        )));
    };
    Ok((parse_deck(first)?, parse_deck(second)?))
}

/// Bottom card times 1, next times 2, and so on
pub fn score(deck: &Deck) -> u64 {
    deck.iter()
        .rev()
        .zip(1..)
        .map(|(&card, weight)| u64::from(card) * weight)
        .sum()
}

/// Play Combat to the end; returns the winner and their deck
pub fn play_combat(mut one: Deck, mut two: Deck) -> (Player, Deck) {
    while let (Some(&a), Some(&b)) = (one.front(), two.front()) {
        one.pop_front();
        two.pop_front();
        if a > b {
            one.extend([a, b]);
        } else {
            two.extend([b, a]);
        }
    }
    if one.is_empty() { (Player::Two, two) } else { (Player::One, one) }
}

/// Play Recursive Combat; a repeated position ends the game in player one's favor
pub fn play_recursive(mut one: Deck, mut two: Deck) -> (Player, Deck) {
    let mut seen: HashSet<(Deck, Deck)> = HashSet::new();

    loop {
        if !seen.insert((one.clone(), two.clone())) {
            return (Player::One, one);
        }
        let (Some(a), Some(b)) = (one.pop_front(), two.pop_front()) else {
            break;
        };

        let round_winner = if one.len() >= a as usize && two.len() >= b as usize {
            let sub_one = one.iter().take(a as usize).copied().collect();
            let sub_two = two.iter().take(b as usize).copied().collect();
            play_recursive(sub_one, sub_two).0
        } else if a > b {
            Player::One
        } else {
            Player::Two
        };

        match round_winner {
            Player::One => one.extend([a, b]),
            Player::Two => two.extend([b, a]),
        }

        if one.is_empty() || two.is_empty() {
            break;
        }
    }

    if one.is_empty() { (Player::Two, two) } else { (Player::One, one) }
}

/// Winning score of Combat
pub fn part1(decks: &(Deck, Deck)) -> u64 {
    let (_, winner) = play_combat(decks.0.clone(), decks.1.clone());
    score(&winner)
}

/// Winning score of Recursive Combat
pub fn part2(decks: &(Deck, Deck)) -> u64 {
    let (_, winner) = play_recursive(decks.0.clone(), decks.1.clone());
    score(&winner)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let decks = parse(text)?;
    Ok(Answers::new(part1(&decks), part2(&decks)))
}
