//! Daily puzzle solutions centred on reassembling an image from shuffled tiles
//!
//! Tiles are matched by their borders, arranged into a square, stitched into
//! one image and scanned for a fixed pattern. The remaining puzzles share
//! the same input handling, grid and number-theory helpers.

#![forbid(unsafe_code)]

/// Tile matching, arrangement, stitching and pattern scanning
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Modular arithmetic and integer range sets
pub mod math;
/// Solutions by year and day, and the registry that finds them
pub mod puzzles;
/// Boolean grids, tiles with edges and hexagonal coordinates
pub mod spatial;

pub use io::error::{AdventError, Result};
