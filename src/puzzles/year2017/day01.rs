//! Inverse Captcha: sums of digits matching a partner digit

use crate::io::error::{Result, invalid_input, parse_error};
use crate::puzzles::answer::Answers;

/// Parse a single line of decimal digits
///
/// # Errors
///
/// Returns an error for a non-digit character or an empty line
pub fn parse(text: &str) -> Result<Vec<u32>> {
    let line = text.trim();
    if line.is_empty() {
        return Err(invalid_input(&"no digits given"));
    }
    line.chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| parse_error(line, &format!("'{c}' is not a digit")))
        })
        .collect()
}

/// Sum of digits equal to the digit `offset` places ahead, wrapping around
pub fn matching_sum(digits: &[u32], offset: usize) -> u32 {
    digits
        .iter()
        .zip(digits.iter().cycle().skip(offset))
        .filter(|(a, b)| a == b)
        .map(|(a, _)| a)
        .sum()
}

/// Digits equal to their successor
pub fn part1(digits: &[u32]) -> u32 {
    matching_sum(digits, 1)
}

/// Digits equal to the one halfway around
///
/// # Errors
///
/// Returns an error for an odd number of digits
pub fn part2(digits: &[u32]) -> Result<u32> {
    if digits.len() % 2 != 0 {
        return Err(invalid_input(&format!(
            "halfway matching needs an even digit count, got {}",
            digits.len()
        )));
    }
    Ok(matching_sum(digits, digits.len() / 2))
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or the digit count is odd
pub fn solve(text: &str) -> Result<Answers> {
    let digits = parse(text)?;
    Ok(Answers::new(part1(&digits), part2(&digits)?))
}
