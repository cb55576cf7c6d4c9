/// Command-line parsing and the puzzle runner
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error type and constructors
pub mod error;
/// PNG export of reassembled images
pub mod image;
/// Input files, lines, sections and token parsing
pub mod input;
/// Progress bar across a batch of puzzles
pub mod progress;
