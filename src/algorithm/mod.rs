//! Tile reassembly: matching borders, placing tiles, stitching and scanning
//!
//! The pipeline runs in four steps:
//! 1. [`matching`] builds the border adjacency graph
//! 2. [`arrangement`] places every tile in a square grid
//! 3. [`stitching`] joins the tile interiors into one image
//! 4. [`scan`] searches all orientations of the image for a pattern

/// Greedy placement of tiles into a square grid
pub mod arrangement;
/// Border matching and adjacency between tiles
pub mod matching;
/// Fixed-pattern search over image orientations
pub mod scan;
/// Concatenation of tile interiors
pub mod stitching;
