//! Password Philosophy: checking passwords against their policies

use regex::Regex;

use crate::io::error::Result;
use crate::io::input::{captures, group, lines, parse_number};
use crate::puzzles::answer::Answers;

/// A policy line: two numbers, a letter and the password it governs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEntry {
    /// First number of the policy
    pub low: usize,
    /// Second number of the policy
    pub high: usize,
    /// Letter the policy is about
    pub letter: char,
    /// Password to check
    pub password: String,
}

impl PasswordEntry {
    /// Letter occurs between `low` and `high` times inclusive
    pub fn valid_by_count(&self) -> bool {
        let count = self.password.chars().filter(|&c| c == self.letter).count();
        (self.low..=self.high).contains(&count)
    }

    /// Letter sits at exactly one of the 1-based positions `low` and `high`
    pub fn valid_by_position(&self) -> bool {
        let at = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|index| self.password.chars().nth(index))
                == Some(self.letter)
        };
        at(self.low) != at(self.high)
    }
}

/// Parse `lo-hi c: password` lines
///
/// # Errors
///
/// Returns an error naming the first malformed line
pub fn parse(text: &str) -> Result<Vec<PasswordEntry>> {
    let pattern = Regex::new(r"^(\d+)-(\d+) ([a-z]): ([a-z]+)$")?;
    lines(text)
        .map(|line| {
            let caps = captures(&pattern, line)?;
            Ok(PasswordEntry {
                low: parse_number(group(&caps, 1), line)?,
                high: parse_number(group(&caps, 2), line)?,
                letter: group(&caps, 3).chars().next().unwrap_or_default(),
                password: group(&caps, 4).to_string(),
            })
        })
        .collect()
}

/// Passwords valid under the occurrence-count policy
pub fn part1(entries: &[PasswordEntry]) -> usize {
    entries.iter().filter(|entry| entry.valid_by_count()).count()
}

/// Passwords valid under the position policy
pub fn part2(entries: &[PasswordEntry]) -> usize {
    entries.iter().filter(|entry| entry.valid_by_position()).count()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let entries = parse(text)?;
    Ok(Answers::new(part1(&entries), part2(&entries)))
}
