//! Greedy constructive placement of tiles into a square grid
//!
//! Starts from the lowest-id corner tile turned so its two unmatched borders
//! face up and left, then fills cells row by row. Each cell knows how many
//! neighbors its tile must have (2 in a corner, 3 along the boundary, 4
//! inside) and which tiles are already placed above and to the left, which
//! narrows the candidates to a handful. A candidate is accepted with the
//! first of its 8 orientations whose borders line up with the placed
//! neighbors. Placed cells are never revisited.

use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::matching::{Adjacency, build_adjacency};
use crate::io::error::{Result, invalid_input, invariant_error};
use crate::spatial::grid::{BoolGrid, Orientation};
use crate::spatial::tiles::{Side, Tile, TileId, edge_of};

/// A tile fixed in one orientation at one grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    /// Id of the placed tile
    pub id: TileId,
    /// Orientation applied to the parsed pixels
    pub orientation: Orientation,
    /// Pixels after orientation
    pub grid: BoolGrid,
}

/// Completed square placement of every tile
#[derive(Debug, Clone)]
pub struct Arrangement {
    side: usize,
    cells: Vec<PlacedTile>,
}

impl Arrangement {
    /// Tiles per row (and per column)
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Tile at a grid cell
    pub fn get(&self, row: usize, col: usize) -> Option<&PlacedTile> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.cells.get(row * self.side + col)
    }

    /// Rows of placed tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[PlacedTile]> {
        self.cells.chunks(self.side.max(1))
    }

    /// Tile ids laid out as the grid
    pub fn ids(&self) -> Vec<Vec<TileId>> {
        self.rows()
            .map(|row| row.iter().map(|placed| placed.id).collect())
            .collect()
    }

    /// Distinct ids in the four corner cells, ascending
    pub fn corners(&self) -> Vec<TileId> {
        let last = self.side.saturating_sub(1);
        let ids: BTreeSet<TileId> = [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .filter_map(|&(row, col)| self.get(row, col))
            .map(|placed| placed.id)
            .collect();
        ids.into_iter().collect()
    }

    /// Product of the corner ids
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not fit in a `u64`
    pub fn corner_product(&self) -> Result<u64> {
        self.corners()
            .into_iter()
            .try_fold(1_u64, u64::checked_mul)
            .ok_or_else(|| invariant_error("corner product", &"product overflows u64"))
    }
}

/// Side of the square grid that holds `tile_count` tiles
///
/// # Errors
///
/// Returns an error unless `tile_count` is a positive perfect square
pub fn grid_side(tile_count: usize) -> Result<usize> {
    let side = (tile_count as f64).sqrt().round() as usize;
    if tile_count == 0 || side * side != tile_count {
        return Err(invalid_input(&format!(
            "{tile_count} tiles cannot form a square grid"
        )));
    }
    Ok(side)
}

/// Neighbor count of a tile sitting at `(row, col)` of a `side` grid
pub const fn expected_neighbors(row: usize, col: usize, side: usize) -> usize {
    let mut count = 0;
    if row > 0 {
        count += 1;
    }
    if row + 1 < side {
        count += 1;
    }
    if col > 0 {
        count += 1;
    }
    if col + 1 < side {
        count += 1;
    }
    count
}

/// Whether `candidate` lines up with the tiles above and to the left
pub fn fits(candidate: &BoolGrid, above: Option<&BoolGrid>, left: Option<&BoolGrid>) -> bool {
    let above_ok = above.is_none_or(|above| {
        candidate.row(0) == above.row(above.rows().saturating_sub(1))
    });
    let left_ok = left.is_none_or(|left| {
        candidate.column(0) == left.column(left.cols().saturating_sub(1))
    });
    above_ok && left_ok
}

/// First orientation of `tile` that fits its placed neighbors
pub fn orient_to_fit(
    tile: &Tile,
    above: Option<&BoolGrid>,
    left: Option<&BoolGrid>,
) -> Option<(Orientation, BoolGrid)> {
    tile.grid()
        .orientations()
        .into_iter()
        .find(|(_, grid)| fits(grid, above, left))
}

/// Turn a corner tile so its unmatched borders face up and left
///
/// Uses rotation only; the chosen corner fixes whether the whole image
/// comes out mirrored, which the pattern scan tolerates.
///
/// # Errors
///
/// Returns an error unless exactly two adjacent borders are unmatched
pub fn orient_corner(corner: &Tile, neighbors: &[&Tile]) -> Result<(Orientation, BoolGrid)> {
    let unmatched: BTreeSet<Side> = Side::ALL
        .into_iter()
        .filter(|&side| {
            let edge = corner.edge(side);
            !neighbors
                .iter()
                .any(|neighbor| neighbor.edges().iter().any(|other| edge.matches(other)))
        })
        .collect();

    let quarter_turns = match unmatched.iter().copied().collect::<Vec<_>>().as_slice() {
        [Side::Top, Side::Left] => 0,
        [Side::Bottom, Side::Left] => 1,
        [Side::Right, Side::Bottom] => 2,
        [Side::Top, Side::Right] => 3,
        other => {
            return Err(invariant_error(
                "corner orientation",
                &format!("tile {} has unmatched sides {other:?}", corner.id()),
            ));
        }
    };

    let orientation = Orientation::new(quarter_turns, false);
    Ok((orientation, corner.oriented(orientation)))
}

fn validate_tiles(tiles: &[Tile]) -> Result<BTreeMap<TileId, &Tile>> {
    let size = tiles.first().map_or(0, Tile::size);
    let mut by_id = BTreeMap::new();
    for tile in tiles {
        if tile.size() != size {
            return Err(invalid_input(&format!(
                "tile {} is {} cells wide, expected {size}",
                tile.id(),
                tile.size()
            )));
        }
        if by_id.insert(tile.id(), tile).is_some() {
            return Err(invalid_input(&format!("tile {} appears twice", tile.id())));
        }
    }
    Ok(by_id)
}

fn place_corner(
    by_id: &BTreeMap<TileId, &Tile>,
    adjacency: &Adjacency,
    side: usize,
) -> Result<PlacedTile> {
    let expected = expected_neighbors(0, 0, side);
    let (&id, neighbor_ids) = adjacency
        .iter()
        .find(|(_, neighbors)| neighbors.len() == expected)
        .ok_or_else(|| invariant_error("tile arrangement", &"no corner tile found"))?;
    let corner = by_id
        .get(&id)
        .ok_or_else(|| invariant_error("tile arrangement", &format!("unknown tile {id}")))?;

    if side == 1 {
        return Ok(PlacedTile {
            id,
            orientation: Orientation::IDENTITY,
            grid: corner.grid().clone(),
        });
    }

    let neighbors: Vec<&Tile> = neighbor_ids
        .iter()
        .filter_map(|neighbor| by_id.get(neighbor).copied())
        .collect();
    let (orientation, grid) = orient_corner(corner, &neighbors)?;
    Ok(PlacedTile {
        id,
        orientation,
        grid,
    })
}

/// Place every tile into a square grid
///
/// Relies on the adjacency graph being exact (see
/// [`EdgeCensus::is_unambiguous`](crate::algorithm::matching::EdgeCensus::is_unambiguous)).
/// Candidates for a cell are tried in ascending id order.
///
/// # Errors
///
/// Returns an error if:
/// - The tile count is not a positive perfect square
/// - Tiles differ in size or share an id
/// - No corner tile exists or it cannot be oriented
/// - Some cell has no tile that fits its placed neighbors
pub fn arrange(tiles: &[Tile]) -> Result<Arrangement> {
    let side = grid_side(tiles.len())?;
    let by_id = validate_tiles(tiles)?;
    let adjacency = build_adjacency(tiles);

    let mut cells: Vec<PlacedTile> = Vec::with_capacity(tiles.len());
    let mut used: BTreeSet<TileId> = BTreeSet::new();

    let corner = place_corner(&by_id, &adjacency, side)?;
    used.insert(corner.id);
    cells.push(corner);

    for index in 1..side * side {
        let (row, col) = (index / side, index % side);
        let above = (row > 0).then(|| cells.get(index - side)).flatten();
        let left = (col > 0).then(|| cells.get(index - 1)).flatten();

        let required: BTreeSet<TileId> = above.iter().chain(left.iter()).map(|p| p.id).collect();
        let expected = expected_neighbors(row, col, side);

        let placed = adjacency
            .iter()
            .filter(|(id, neighbors)| {
                !used.contains(*id)
                    && neighbors.len() == expected
                    && required.is_subset(neighbors)
            })
            .filter_map(|(id, _)| by_id.get(id))
            .find_map(|tile| {
                orient_to_fit(tile, above.map(|p| &p.grid), left.map(|p| &p.grid)).map(
                    |(orientation, grid)| PlacedTile {
                        id: tile.id(),
                        orientation,
                        grid,
                    },
                )
            })
            .ok_or_else(|| {
                invariant_error(
                    "tile arrangement",
                    &format!("no tile fits cell ({row}, {col})"),
                )
            })?;

        used.insert(placed.id);
        cells.push(placed);
    }

    Ok(Arrangement { side, cells })
}

/// Whether every pair of touching borders in the arrangement is identical
pub fn borders_agree(arrangement: &Arrangement) -> bool {
    let side = arrangement.side();
    (0..side).all(|row| {
        (0..side).all(|col| {
            let Some(placed) = arrangement.get(row, col) else {
                return false;
            };
            // Touching borders are read in opposite directions
            let right_ok = arrangement.get(row, col + 1).is_none_or(|right| {
                edge_of(&placed.grid, Side::Right) == edge_of(&right.grid, Side::Left).reversed()
            });
            let below_ok = arrangement.get(row + 1, col).is_none_or(|below| {
                edge_of(&placed.grid, Side::Bottom) == edge_of(&below.grid, Side::Top).reversed()
            });
            right_ok && below_ok
        })
    })
}
