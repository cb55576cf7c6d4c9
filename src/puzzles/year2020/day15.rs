//! Rambunctious Recitation: the elves' memory game

use crate::io::configuration::{MEMORY_GAME_LONG_TURNS, MEMORY_GAME_SHORT_TURNS};
use crate::io::error::{Result, invalid_input};
use crate::io::input::numbers;
use crate::puzzles::answer::Answers;

/// Parse the comma separated starting numbers
///
/// # Errors
///
/// Returns an error for a bad number or an empty list
pub fn parse(text: &str) -> Result<Vec<u32>> {
    let starting: Vec<u32> = numbers(text)?;
    if starting.is_empty() {
        return Err(invalid_input(&"no starting numbers"));
    }
    Ok(starting)
}

/// Number spoken on turn `turn` (1-based)
///
/// Each turn speaks 0 if the previous number was new, otherwise how many
/// turns apart its last two mentions were. Last-seen turns live in a flat
/// table indexed by number since no spoken number can exceed the turn count.
pub fn spoken_at(starting: &[u32], turn: usize) -> u32 {
    if turn == 0 {
        return 0;
    }
    if let Some(&given) = starting.get(turn - 1) {
        return given;
    }

    let largest = starting.iter().copied().max().unwrap_or(0) as usize;
    // last_seen[n] is the turn n was last spoken before the current one; 0 = never
    let mut last_seen: Vec<u32> = vec![0; turn.max(largest + 1)];
    let Some((&last, earlier)) = starting.split_last() else {
        return 0;
    };
    for (index, &number) in earlier.iter().enumerate() {
        if let Some(slot) = last_seen.get_mut(number as usize) {
            *slot = index as u32 + 1;
        }
    }

    let mut current = last;
    for now in starting.len()..turn {
        let Some(slot) = last_seen.get_mut(current as usize) else {
            break;
        };
        let previous = *slot;
        *slot = now as u32;
        current = if previous == 0 { 0 } else { now as u32 - previous };
    }
    current
}

/// The 2020th number spoken
pub fn part1(starting: &[u32]) -> u32 {
    spoken_at(starting, MEMORY_GAME_SHORT_TURNS)
}

/// The 30,000,000th number spoken
pub fn part2(starting: &[u32]) -> u32 {
    spoken_at(starting, MEMORY_GAME_LONG_TURNS)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let starting = parse(text)?;
    Ok(Answers::new(part1(&starting), part2(&starting)))
}
