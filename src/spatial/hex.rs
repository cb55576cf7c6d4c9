//! Axial coordinates on a hexagonal grid
//!
//! Two axes `(q, r)`: `q` grows east, `r` grows along the north-east diagonal.
//! With that choice every direction is a unit step on one axis or a
//! diagonal step on both, and the distance formula only has to distinguish
//! whether the two components share a sign.

use crate::io::error::{Result, parse_error};
use std::ops::{Add, AddAssign};

/// A cell of a hexagonal grid in axial coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HexCoord {
    /// East-west axis
    pub q: i64,
    /// North-east diagonal axis
    pub r: i64,
}

impl HexCoord {
    /// The origin cell
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a coordinate
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Number of steps from the origin
    pub const fn distance_from_origin(self) -> u64 {
        if (self.q >= 0) == (self.r >= 0) {
            let q = self.q.unsigned_abs();
            let r = self.r.unsigned_abs();
            if q > r { q } else { r }
        } else {
            self.q.unsigned_abs() + self.r.unsigned_abs()
        }
    }

    /// Number of steps between two cells
    pub const fn distance(self, other: Self) -> u64 {
        Self::new(self.q - other.q, self.r - other.r).distance_from_origin()
    }

    /// The six adjacent cells
    pub fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|direction| self + direction)
    }
}

impl Add<HexDirection> for HexCoord {
    type Output = Self;

    fn add(self, direction: HexDirection) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q + dq, self.r + dr)
    }
}

impl AddAssign<HexDirection> for HexCoord {
    fn add_assign(&mut self, direction: HexDirection) {
        *self = *self + direction;
    }
}

/// The six neighbor directions of a hex cell
///
/// Grids with flat-topped hexes name them by compass points `n ne se s sw
/// nw`; grids with pointy-topped hexes use `e se sw w nw ne`. Both map onto
/// the same six axial offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    /// `(1, 0)`: east, or south-east on a flat-topped grid
    East,
    /// `(1, 1)`: north-east
    NorthEast,
    /// `(0, 1)`: north-west, or north on a flat-topped grid
    NorthWest,
    /// `(-1, 0)`: west, or north-west on a flat-topped grid
    West,
    /// `(-1, -1)`: south-west
    SouthWest,
    /// `(0, -1)`: south-east, or south on a flat-topped grid
    SouthEast,
}

impl HexDirection {
    /// All directions, counter-clockwise from east
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Axial offset of one step
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::East => (1, 0),
            Self::NorthEast => (1, 1),
            Self::NorthWest => (0, 1),
            Self::West => (-1, 0),
            Self::SouthWest => (-1, -1),
            Self::SouthEast => (0, -1),
        }
    }

    /// Parse a pointy-topped direction token (`e se sw w nw ne`)
    ///
    /// # Errors
    ///
    /// Returns an error for any other token
    pub fn from_pointy(token: &str) -> Result<Self> {
        match token {
            "e" => Ok(Self::East),
            "se" => Ok(Self::SouthEast),
            "sw" => Ok(Self::SouthWest),
            "w" => Ok(Self::West),
            "nw" => Ok(Self::NorthWest),
            "ne" => Ok(Self::NorthEast),
            other => Err(parse_error(token, &format!("unknown direction '{other}'"))),
        }
    }

    /// Parse a flat-topped direction token (`n ne se s sw nw`)
    ///
    /// # Errors
    ///
    /// Returns an error for any other token
    pub fn from_flat(token: &str) -> Result<Self> {
        match token {
            "n" => Ok(Self::NorthWest),
            "ne" => Ok(Self::NorthEast),
            "se" => Ok(Self::East),
            "s" => Ok(Self::SouthEast),
            "sw" => Ok(Self::SouthWest),
            "nw" => Ok(Self::West),
            other => Err(parse_error(token, &format!("unknown direction '{other}'"))),
        }
    }
}
