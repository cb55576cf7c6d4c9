//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Boolean grids and their 8 symmetries
//! - Identified square tiles and their borders
//! - Axial hexagonal coordinates

/// Boolean grids with rotation, reflection and trimming
pub mod grid;
/// Hexagonal grid coordinates and directions
pub mod hex;
/// Square tiles, borders and tile parsing
pub mod tiles;

pub use grid::{BoolGrid, Orientation};
pub use tiles::{Edge, Side, Tile, TileId};
