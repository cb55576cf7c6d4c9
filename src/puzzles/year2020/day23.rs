//! Crab Cups: a long-running game on a ring of labeled cups

use crate::io::configuration::{CUP_GAME_LONG_CUPS, CUP_GAME_LONG_MOVES, CUP_GAME_SHORT_MOVES};
use crate::io::error::{Result, invalid_input, parse_error};
use crate::puzzles::answer::Answers;

/// Fewest cups a game can be played with
pub const MIN_CUPS: usize = 5;

/// Parse a single line of digit labels
///
/// # Errors
///
/// Returns an error unless the labels are a permutation of `1..=n` with
/// `n >= MIN_CUPS`
pub fn parse(text: &str) -> Result<Vec<u32>> {
    let line = text.trim();
    let cups = line
        .chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| parse_error(line, &format!("'{c}' is not a cup label")))
        })
        .collect::<Result<Vec<u32>>>()?;

    let mut sorted = cups.clone();
    sorted.sort_unstable();
    let expected: Vec<u32> = (1..).take(cups.len()).collect();
    if cups.len() < MIN_CUPS || sorted != expected {
        return Err(invalid_input(&format!(
            "cups must be labeled 1 to n with at least {MIN_CUPS} cups, got '{line}'"
        )));
    }
    Ok(cups)
}

/// Cups stored as a successor table indexed by label
#[derive(Debug, Clone)]
pub struct Circle {
    next: Vec<u32>,
    current: u32,
    highest: u32,
}

impl Circle {
    /// Ring of `cups` followed by the labels `cups.len() + 1 ..= total`
    pub fn new(cups: &[u32], total: usize) -> Self {
        let highest = u32::try_from(total.max(cups.len())).unwrap_or(u32::MAX);
        let order: Vec<u32> = cups
            .iter()
            .copied()
            .chain((cups.len() as u32 + 1)..=highest)
            .collect();

        let mut next = vec![0; highest as usize + 1];
        for (&cup, &after) in order.iter().zip(order.iter().cycle().skip(1)) {
            if let Some(slot) = next.get_mut(cup as usize) {
                *slot = after;
            }
        }

        Self {
            next,
            current: order.first().copied().unwrap_or(1),
            highest,
        }
    }

    /// Label clockwise of `cup`
    pub fn after(&self, cup: u32) -> u32 {
        self.next.get(cup as usize).copied().unwrap_or(0)
    }

    fn link(&mut self, cup: u32, after: u32) {
        if let Some(slot) = self.next.get_mut(cup as usize) {
            *slot = after;
        }
    }

    const fn below(&self, cup: u32) -> u32 {
        if cup <= 1 { self.highest } else { cup - 1 }
    }

    /// Pick up three cups, place them after the destination and advance
    pub fn play_move(&mut self) {
        let first = self.after(self.current);
        let second = self.after(first);
        let third = self.after(second);
        self.link(self.current, self.after(third));

        let mut destination = self.below(self.current);
        while [first, second, third].contains(&destination) {
            destination = self.below(destination);
        }

        self.link(third, self.after(destination));
        self.link(destination, first);
        self.current = self.after(self.current);
    }

    /// Play `moves` moves
    pub fn play(&mut self, moves: usize) {
        for _ in 0..moves {
            self.play_move();
        }
    }

    /// Labels clockwise from cup 1, excluding it
    pub fn labels_after_one(&self) -> Vec<u32> {
        let mut labels = Vec::new();
        let mut cup = self.after(1);
        while cup != 1 && labels.len() < self.highest as usize {
            labels.push(cup);
            cup = self.after(cup);
        }
        labels
    }
}

/// Labels after cup 1 once the short game is over
pub fn part1(cups: &[u32]) -> String {
    let mut circle = Circle::new(cups, cups.len());
    circle.play(CUP_GAME_SHORT_MOVES);
    circle
        .labels_after_one()
        .iter()
        .map(u32::to_string)
        .collect()
}

/// Product of the two labels after cup 1 in the long game
pub fn part2(cups: &[u32]) -> u64 {
    let mut circle = Circle::new(cups, CUP_GAME_LONG_CUPS);
    circle.play(CUP_GAME_LONG_MOVES);
    let first = circle.after(1);
    u64::from(first) * u64::from(circle.after(first))
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let cups = parse(text)?;
    Ok(Answers::new(part1(&cups), part2(&cups)))
}
