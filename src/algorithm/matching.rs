//! Edge matching between tiles
//!
//! Two tiles are neighbors when any border of one equals any border of the
//! other in either reading direction. The arrangement step relies on the
//! input having no accidental matches: every border is shared by at most
//! two tiles, so the adjacency graph is exactly the physical neighborhood.
//! [`EdgeCensus`] checks that assumption for a given input.

use std::collections::{BTreeMap, BTreeSet};

use crate::spatial::tiles::{Edge, Tile, TileId};

/// Tile id to the ids of all tiles sharing a border with it
pub type Adjacency = BTreeMap<TileId, BTreeSet<TileId>>;

/// Whether any border of `a` matches any border of `b`
pub fn tiles_match(a: &Tile, b: &Tile) -> bool {
    let b_edges = b.edges();
    a.edges()
        .iter()
        .any(|edge| b_edges.iter().any(|other| edge.matches(other)))
}

/// Symmetric adjacency map over all tiles
///
/// Every tile gets an entry, including tiles that match nothing.
pub fn build_adjacency(tiles: &[Tile]) -> Adjacency {
    let mut adjacency: Adjacency = tiles
        .iter()
        .map(|tile| (tile.id(), BTreeSet::new()))
        .collect();

    for (index, a) in tiles.iter().enumerate() {
        for b in tiles.iter().skip(index + 1) {
            if a.id() != b.id() && tiles_match(a, b) {
                adjacency.entry(a.id()).or_default().insert(b.id());
                adjacency.entry(b.id()).or_default().insert(a.id());
            }
        }
    }

    adjacency
}

/// Ids of tiles with exactly two neighbors, ascending
pub fn corner_ids(adjacency: &Adjacency) -> Vec<TileId> {
    adjacency
        .iter()
        .filter(|(_, neighbors)| neighbors.len() == 2)
        .map(|(&id, _)| id)
        .collect()
}

/// Frequency of every direction-independent border across a tile set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeCensus {
    occurrences: BTreeMap<Edge, usize>,
    palindromes: usize,
}

impl EdgeCensus {
    /// Count the borders of every tile
    pub fn of(tiles: &[Tile]) -> Self {
        let mut census = Self::default();
        for edge in tiles.iter().flat_map(Tile::edges) {
            if edge.is_palindrome() {
                census.palindromes += 1;
            }
            *census.occurrences.entry(edge.canonical()).or_insert(0) += 1;
        }
        census
    }

    /// Number of distinct borders seen exactly `count` times
    pub fn borders_seen(&self, count: usize) -> usize {
        self.occurrences.values().filter(|&&n| n == count).count()
    }

    /// Occurrence count to number of distinct borders with that count
    pub fn histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for &count in self.occurrences.values() {
            *histogram.entry(count).or_insert(0) += 1;
        }
        histogram
    }

    /// Number of borders that read the same in both directions
    pub const fn palindromes(&self) -> usize {
        self.palindromes
    }

    /// Whether adjacency can be read off the borders without ambiguity
    ///
    /// Holds when no border is shared by more than two tiles and no border
    /// is a palindrome, which would make its flip undetectable.
    pub fn is_unambiguous(&self) -> bool {
        self.palindromes == 0 && self.occurrences.values().all(|&n| n <= 2)
    }
}
