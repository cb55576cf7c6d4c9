//! Memory Reallocation

use std::collections::HashMap;

use crate::io::error::{Result, invalid_input};
use crate::io::input::numbers;
use crate::puzzles::answer::Answers;

/// Parse the block counts of each bank
///
/// # Errors
///
/// Returns an error for a non-numeric token or no banks at all
pub fn parse(text: &str) -> Result<Vec<u32>> {
    let banks: Vec<u32> = numbers(text)?;
    if banks.is_empty() {
        return Err(invalid_input(&"no memory banks given"));
    }
    Ok(banks)
}

/// Empty the fullest bank (lowest index on ties) and deal its blocks out
pub fn redistribute(banks: &mut [u32]) {
    let Some((start, blocks)) = banks
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (index, blocks)| match best {
            Some((_, most)) if most >= blocks => best,
            _ => Some((index, blocks)),
        })
    else {
        return;
    };

    if let Some(bank) = banks.get_mut(start) {
        *bank = 0;
    }
    let count = banks.len();
    for step in 1..=blocks as usize {
        if let Some(bank) = banks.get_mut((start + step) % count) {
            *bank += 1;
        }
    }
}

/// Cycles until a configuration repeats, and the length of that loop
pub fn cycles_until_repeat(banks: &[u32]) -> (usize, usize) {
    let mut seen: HashMap<Vec<u32>, usize> = HashMap::new();
    let mut current = banks.to_vec();
    let mut cycles = 0;

    loop {
        if let Some(&first) = seen.get(&current) {
            return (cycles, cycles - first);
        }
        seen.insert(current.clone(), cycles);
        redistribute(&mut current);
        cycles += 1;
    }
}

/// Redistribution cycles before a repeat
pub fn part1(banks: &[u32]) -> usize {
    cycles_until_repeat(banks).0
}

/// Length of the repeating loop
pub fn part2(banks: &[u32]) -> usize {
    cycles_until_repeat(banks).1
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let banks = parse(text)?;
    let (cycles, loop_length) = cycles_until_repeat(&banks);
    Ok(Answers::new(cycles, loop_length))
}
