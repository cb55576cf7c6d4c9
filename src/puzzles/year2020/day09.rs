//! Encoding Error: the XMAS cipher's invalid number and its weakness

use std::collections::HashMap;

use crate::io::configuration::XMAS_PREAMBLE;
use crate::io::error::{Result, invariant_error};
use crate::io::input::numbers;
use crate::puzzles::answer::Answers;

/// Parse one number per line
///
/// # Errors
///
/// Returns an error for a line that is not an integer
pub fn parse(text: &str) -> Result<Vec<i64>> {
    numbers(text)
}

/// Whether two distinct positions of `window` sum to `total`
fn has_pair_sum(window: &[i64], total: i64) -> bool {
    window.iter().enumerate().any(|(i, &a)| {
        window
            .iter()
            .skip(i + 1)
            .any(|&b| a + b == total)
    })
}

/// First number that is not the sum of two of the `preamble` numbers before it
///
/// # Errors
///
/// Returns an error if every number is valid
pub fn first_invalid(values: &[i64], preamble: usize) -> Result<i64> {
    values
        .windows(preamble + 1)
        .find_map(|window| {
            let (previous, last) = window.split_at(preamble);
            let &value = last.first()?;
            (!has_pair_sum(previous, value)).then_some(value)
        })
        .ok_or_else(|| invariant_error("XMAS validation", &"every number is valid"))
}

/// Sum of the smallest and largest number of a contiguous run of at least
/// two numbers that sums to `target`
///
/// Prefix sums are looked up by value; the earliest prefix with a given sum
/// is kept, which favors the longest run ending at each position.
///
/// # Errors
///
/// Returns an error if no such run exists
pub fn encryption_weakness(values: &[i64], target: i64) -> Result<i64> {
    let mut first_prefix_with_sum: HashMap<i64, usize> = HashMap::from([(0, 0)]);
    let mut running = 0;

    for (index, &value) in values.iter().enumerate() {
        running += value;
        let end = index + 1;
        first_prefix_with_sum.entry(running).or_insert(end);

        if let Some(&start) = first_prefix_with_sum.get(&(running - target))
            && end.saturating_sub(start) >= 2
        {
            let run = values.get(start..end).unwrap_or_default();
            if let (Some(min), Some(max)) = (run.iter().min(), run.iter().max()) {
                return Ok(min + max);
            }
        }
    }

    Err(invariant_error(
        "encryption weakness",
        &format!("no run of two or more numbers sums to {target}"),
    ))
}

/// First invalid number with the standard 25-number preamble
///
/// # Errors
///
/// Returns an error if every number is valid
pub fn part1(values: &[i64]) -> Result<i64> {
    first_invalid(values, XMAS_PREAMBLE)
}

/// Encryption weakness for the part 1 number
///
/// # Errors
///
/// Returns an error if either search fails
pub fn part2(values: &[i64]) -> Result<i64> {
    encryption_weakness(values, part1(values)?)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or either search fails
pub fn solve(text: &str) -> Result<Answers> {
    let values = parse(text)?;
    let invalid = part1(&values)?;
    Ok(Answers::new(invalid, encryption_weakness(&values, invalid)?))
}
