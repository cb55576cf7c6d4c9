//! Daily puzzle solutions
//!
//! Every day module exposes `parse`, `part1`, `part2` and a `solve` entry
//! point that runs both parts on raw input text. Days share nothing beyond
//! the helpers in [`crate::io::input`], [`crate::spatial`] and [`crate::math`].

/// Rendered answers to both parts of a puzzle
pub mod answer;
/// Lookup of solvers by year and day
pub mod registry;
/// Solutions to the 2017 event
pub mod year2017;
/// Solutions to the 2020 event
pub mod year2020;

pub use answer::Answers;
pub use registry::{PuzzleId, available_days, solve};
