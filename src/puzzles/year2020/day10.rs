//! Adapter Array: chaining joltage adapters

use crate::io::error::{Result, invariant_error};
use crate::io::input::numbers;
use crate::puzzles::answer::Answers;

/// Largest joltage step one adapter can take
pub const MAX_STEP: u64 = 3;

/// Parse adapter ratings and build the full chain
///
/// The chain starts at the outlet (0), lists every adapter in ascending
/// order and ends at the device, rated 3 above the largest adapter.
///
/// # Errors
///
/// Returns an error for a line that is not a non-negative integer
pub fn parse(text: &str) -> Result<Vec<u64>> {
    let mut chain: Vec<u64> = numbers(text)?;
    chain.sort_unstable();
    let device = chain.last().copied().unwrap_or(0) + MAX_STEP;
    chain.insert(0, 0);
    chain.push(device);
    Ok(chain)
}

/// Product of the number of 1-jolt steps and 3-jolt steps
///
/// # Errors
///
/// Returns an error if some step is larger than 3
pub fn part1(chain: &[u64]) -> Result<usize> {
    let mut ones = 0;
    let mut threes = 0;
    for pair in chain.windows(2) {
        match pair {
            [a, b] if b - a == 1 => ones += 1,
            [a, b] if b - a == 3 => threes += 1,
            [a, b] if b - a > MAX_STEP => {
                return Err(invariant_error(
                    "adapter chain",
                    &format!("gap from {a} to {b} is too large"),
                ));
            }
            _ => {}
        }
    }
    Ok(ones * threes)
}

/// Number of distinct adapter subsets that still connect outlet to device
pub fn part2(chain: &[u64]) -> u64 {
    // ways[i] counts arrangements ending at chain[i]
    let mut ways: Vec<u64> = Vec::with_capacity(chain.len());
    for (index, &joltage) in chain.iter().enumerate() {
        if index == 0 {
            ways.push(1);
            continue;
        }
        let reachable_from = chain
            .iter()
            .zip(ways.iter())
            .take(index)
            .skip(index.saturating_sub(3))
            .filter(|&(&previous, _)| joltage - previous <= MAX_STEP)
            .map(|(_, &count)| count)
            .sum();
        ways.push(reachable_from);
    }
    ways.last().copied().unwrap_or(0)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or the chain has a gap
pub fn solve(text: &str) -> Result<Answers> {
    let chain = parse(text)?;
    Ok(Answers::new(part1(&chain)?, part2(&chain)))
}
