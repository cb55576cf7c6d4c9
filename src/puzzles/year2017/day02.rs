//! Corruption Checksum

use itertools::Itertools;

use crate::io::error::{Result, invalid_input, invariant_error};
use crate::io::input::{lines, numbers};
use crate::puzzles::answer::Answers;

/// Parse whitespace separated rows of numbers
///
/// # Errors
///
/// Returns an error for a non-numeric token or an empty row set
pub fn parse(text: &str) -> Result<Vec<Vec<u64>>> {
    let rows = lines(text)
        .map(numbers)
        .collect::<Result<Vec<Vec<u64>>>>()?;
    if rows.is_empty() {
        return Err(invalid_input(&"spreadsheet is empty"));
    }
    Ok(rows)
}

/// Difference between the largest and smallest value of a row
pub fn row_range(row: &[u64]) -> u64 {
    match row.iter().minmax().into_option() {
        Some((min, max)) => max - min,
        None => 0,
    }
}

/// Quotient of the only pair in the row where one value divides the other
///
/// # Errors
///
/// Returns an error if no pair divides evenly
pub fn even_quotient(row: &[u64]) -> Result<u64> {
    row.iter()
        .tuple_combinations()
        .find_map(|(&a, &b)| {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            (low != 0 && high % low == 0).then(|| high / low)
        })
        .ok_or_else(|| {
            invariant_error(
                "even division",
                &format!("no value divides another in row {row:?}"),
            )
        })
}

/// Checksum of row ranges
pub fn part1(rows: &[Vec<u64>]) -> u64 {
    rows.iter().map(|row| row_range(row)).sum()
}

/// Sum of the evenly divisible quotients
///
/// # Errors
///
/// Returns an error if any row has no evenly dividing pair
pub fn part2(rows: &[Vec<u64>]) -> Result<u64> {
    rows.iter().map(|row| even_quotient(row)).sum()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or a row has no evenly dividing pair
pub fn solve(text: &str) -> Result<Answers> {
    let rows = parse(text)?;
    Ok(Answers::new(part1(&rows), part2(&rows)?))
}
