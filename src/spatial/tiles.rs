//! Square image tiles and their borders
//!
//! A tile is an immutable square [`BoolGrid`] tagged with a numeric id. Its
//! four borders are read clockwise, so two tiles that sit next to each other
//! in the final image share a border read in opposite directions unless one
//! of them is flipped. Border matching therefore ignores reading direction.

use regex::Regex;
use std::collections::HashSet;

use crate::io::error::{Result, invalid_input, parse_error};
use crate::io::input::{blocks, captures, group, parse_number};
use crate::spatial::grid::{BoolGrid, Orientation};

/// Numeric tile identifier
pub type TileId = u64;

/// One side of a square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// First row
    Top,
    /// Last column
    Right,
    /// Last row
    Bottom,
    /// First column
    Left,
}

impl Side {
    /// All sides in clockwise order starting at the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A tile border read clockwise around the tile
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    cells: Vec<bool>,
}

impl Edge {
    /// Wrap a border sequence
    pub const fn new(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    /// Border cells in clockwise reading order
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The same border read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            cells: self.cells.iter().rev().copied().collect(),
        }
    }

    /// Whether two borders can be placed against each other
    pub fn matches(&self, other: &Self) -> bool {
        self.cells == other.cells || self.cells.iter().eq(other.cells.iter().rev())
    }

    /// Direction-independent representative (the smaller reading)
    #[must_use]
    pub fn canonical(&self) -> Self {
        let reversed = self.reversed();
        if reversed < *self { reversed } else { self.clone() }
    }

    /// Whether the border reads the same in both directions
    pub fn is_palindrome(&self) -> bool {
        self.cells.iter().eq(self.cells.iter().rev())
    }
}

/// An identified square image fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    grid: BoolGrid,
}

impl Tile {
    /// Create a tile from a square grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or not square
    pub fn new(id: TileId, grid: BoolGrid) -> Result<Self> {
        if grid.rows() == 0 || grid.rows() != grid.cols() {
            return Err(invalid_input(&format!(
                "tile {id} is {}x{}, expected a non-empty square",
                grid.rows(),
                grid.cols()
            )));
        }
        Ok(Self { id, grid })
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Tile pixels in their parsed orientation
    pub const fn grid(&self) -> &BoolGrid {
        &self.grid
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        self.grid.rows()
    }

    /// Border on `side` of the parsed orientation
    pub fn edge(&self, side: Side) -> Edge {
        edge_of(&self.grid, side)
    }

    /// All four borders in [`Side::ALL`] order
    pub fn edges(&self) -> [Edge; 4] {
        Side::ALL.map(|side| self.edge(side))
    }

    /// Pixels after applying `orientation`
    pub fn oriented(&self, orientation: Orientation) -> BoolGrid {
        self.grid.oriented(orientation)
    }
}

/// Border of any square grid, read clockwise
pub fn edge_of(grid: &BoolGrid, side: Side) -> Edge {
    let last_row = grid.rows().saturating_sub(1);
    let last_col = grid.cols().saturating_sub(1);
    let cells = match side {
        Side::Top => grid.row(0),
        Side::Right => grid.column(last_col),
        Side::Bottom => grid.row(last_row).into_iter().rev().collect(),
        Side::Left => grid.column(0).into_iter().rev().collect(),
    };
    Edge::new(cells)
}

/// Parse one `Tile <id>:` block followed by its pixel rows
///
/// # Errors
///
/// Returns an error if the header or any pixel row is malformed
pub fn parse_tile(block: &str, header: &Regex) -> Result<Tile> {
    let mut rows = block.lines().map(str::trim);
    let first = rows
        .next()
        .ok_or_else(|| invalid_input(&"empty tile block"))?;
    let caps = captures(header, first)?;
    let id = parse_number(group(&caps, 1), first)?;

    let body: Vec<&str> = rows.collect();
    let grid = BoolGrid::parse(&body.join("\n"))?;
    Tile::new(id, grid)
}

/// Parse every tile block of an input
///
/// # Errors
///
/// Returns an error if a block is malformed, tiles differ in size, or an
/// id appears twice
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let header = Regex::new(r"^Tile (\d+):$")?;
    let tiles = blocks(text)
        .iter()
        .map(|block| parse_tile(block, &header))
        .collect::<Result<Vec<_>>>()?;

    let Some(size) = tiles.first().map(Tile::size) else {
        return Err(invalid_input(&"no tiles in input"));
    };

    let mut seen = HashSet::new();
    for tile in &tiles {
        if tile.size() != size {
            return Err(parse_error(
                &format!("Tile {}:", tile.id()),
                &format!("tile is {0}x{0} but the first tile is {size}x{size}", tile.size()),
            ));
        }
        if !seen.insert(tile.id()) {
            return Err(invalid_input(&format!("tile {} appears twice", tile.id())));
        }
    }

    Ok(tiles)
}
