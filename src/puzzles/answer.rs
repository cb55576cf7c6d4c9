//! The pair of answers every puzzle produces

use std::fmt;

/// Rendered answers to both parts of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Answer to part 1
    pub part1: String,
    /// Answer to part 2
    pub part2: String,
}

impl Answers {
    /// Render any two displayable answers
    pub fn new(part1: impl fmt::Display, part2: impl fmt::Display) -> Self {
        Self {
            part1: part1.to_string(),
            part2: part2.to_string(),
        }
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution to part 1: {}", self.part1)?;
        write!(f, "Solution to part 2: {}", self.part2)
    }
}
