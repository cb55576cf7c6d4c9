//! Lookup of puzzle solvers by year and day

use std::fmt;

use crate::io::error::{AdventError, Result};
use crate::puzzles::answer::Answers;
use crate::puzzles::{year2017, year2020};

/// Signature shared by every day's entry point
pub type Solver = fn(&str) -> Result<Answers>;

/// A puzzle identified by event year and day of December
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleId {
    /// Event year
    pub year: u16,
    /// Day of December (1-25)
    pub day: u8,
}

impl PuzzleId {
    /// Create a puzzle id
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {:02}", self.year, self.day)
    }
}

fn year_table(year: u16) -> &'static [(u8, Solver)] {
    match year {
        2017 => year2017::SOLVERS,
        2020 => year2020::SOLVERS,
        _ => &[],
    }
}

/// Solver registered for a puzzle, if any
pub fn solver(id: PuzzleId) -> Option<Solver> {
    year_table(id.year)
        .iter()
        .find(|(day, _)| *day == id.day)
        .map(|&(_, solve)| solve)
}

/// Solve a puzzle from its input text
///
/// # Errors
///
/// Returns [`AdventError::UnknownPuzzle`] if no solver is registered, or the
/// solver's own parse or solving error
pub fn solve(id: PuzzleId, text: &str) -> Result<Answers> {
    let solve = solver(id).ok_or(AdventError::UnknownPuzzle {
        year: id.year,
        day: id.day,
    })?;
    solve(text)
}

/// Days with a registered solver for `year`, ascending
pub fn available_days(year: u16) -> Vec<u8> {
    let mut days: Vec<u8> = year_table(year).iter().map(|&(day, _)| day).collect();
    days.sort_unstable();
    days
}

/// Years with at least one registered solver, ascending
pub fn available_years() -> Vec<u16> {
    vec![2017, 2020]
}
