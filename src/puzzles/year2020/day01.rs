//! Report Repair: entries of an expense report that sum to a target

use itertools::Itertools;

use crate::io::configuration::EXPENSE_TARGET;
use crate::io::error::{Result, invariant_error};
use crate::io::input::numbers;
use crate::puzzles::answer::Answers;

/// Parse one entry per line
///
/// # Errors
///
/// Returns an error for a line that is not an integer
pub fn parse(text: &str) -> Result<Vec<i64>> {
    numbers(text)
}

/// Product of the `count` entries summing to `target`
///
/// Entries are picked by position, so a value listed twice may be used twice.
///
/// # Errors
///
/// Returns an error if no such entries exist
pub fn product_of_entries_summing_to(entries: &[i64], count: usize, target: i64) -> Result<i64> {
    entries
        .iter()
        .combinations(count)
        .find(|picked| picked.iter().copied().sum::<i64>() == target)
        .map(|picked| picked.into_iter().product())
        .ok_or_else(|| {
            invariant_error(
                "expense report",
                &format!("no {count} entries sum to {target}"),
            )
        })
}

/// Product of the two entries summing to 2020
///
/// # Errors
///
/// Returns an error if no pair sums to the target
pub fn part1(entries: &[i64]) -> Result<i64> {
    product_of_entries_summing_to(entries, 2, EXPENSE_TARGET)
}

/// Product of the three entries summing to 2020
///
/// # Errors
///
/// Returns an error if no triple sums to the target
pub fn part2(entries: &[i64]) -> Result<i64> {
    product_of_entries_summing_to(entries, 3, EXPENSE_TARGET)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or either part has no solution
pub fn solve(text: &str) -> Result<Answers> {
    let entries = parse(text)?;
    Ok(Answers::new(part1(&entries)?, part2(&entries)?))
}
