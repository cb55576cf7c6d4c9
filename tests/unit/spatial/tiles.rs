//! Tests for tiles, borders and tile parsing

#[cfg(test)]
mod tests {
    use advent::spatial::grid::{BoolGrid, Orientation};
    use advent::spatial::tiles::{Edge, Side, Tile, edge_of, parse_tiles};

    const SAMPLE: &str = include_str!("../../data/year2020/day20.txt");

    fn small_tile() -> Tile {
        let grid = BoolGrid::parse("##.\n..#\n#..").expect("valid grid");
        Tile::new(7, grid).expect("square tile")
    }

    // Tests that borders are read clockwise
    // Verified by reading the bottom border left to right
    #[test]
    fn test_edges_read_clockwise() {
        let tile = small_tile();
        assert_eq!(tile.edge(Side::Top).cells(), &[true, true, false]);
        assert_eq!(tile.edge(Side::Right).cells(), &[false, true, false]);
        assert_eq!(tile.edge(Side::Bottom).cells(), &[false, false, true]);
        assert_eq!(tile.edge(Side::Left).cells(), &[true, false, true]);
        assert_eq!(tile.edges()[0], edge_of(tile.grid(), Side::Top));
    }

    // Tests direction-independent matching and canonical form
    // Verified by comparing only the forward reading in matches
    #[test]
    fn test_edge_matching_ignores_direction() {
        let edge = Edge::new(vec![true, false, false]);
        let reversed = edge.reversed();
        assert!(edge.matches(&reversed));
        assert_eq!(edge.canonical(), reversed.canonical());
        assert!(!edge.matches(&Edge::new(vec![false, true, false])));
        assert!(Edge::new(vec![true, false, true]).is_palindrome());
        assert!(!edge.is_palindrome());
    }

    // Tests that a rotated tile's top becomes what was its left border
    // Verified by rotating counter-clockwise in BoolGrid::rotate_90
    #[test]
    fn test_orientation_moves_edges() {
        let tile = small_tile();
        let turned = tile.oriented(Orientation::new(1, false));
        assert_eq!(edge_of(&turned, Side::Top), tile.edge(Side::Left));
        assert_eq!(edge_of(&turned, Side::Right), tile.edge(Side::Top));
    }

    // Tests that non-square grids cannot become tiles
    // Verified by removing the rows == cols check
    #[test]
    fn test_tile_must_be_square() {
        let grid = BoolGrid::parse("##.\n..#").expect("valid grid");
        assert!(Tile::new(1, grid).is_err());
    }

    // Tests parsing of the 9-tile sample
    // Verified by using the first tile's size for the id check
    #[test]
    fn test_parse_sample_tiles() {
        let tiles = parse_tiles(SAMPLE).expect("sample parses");
        assert_eq!(tiles.len(), 9);
        assert!(tiles.iter().all(|tile| tile.size() == 10));
        assert_eq!(tiles.first().map(Tile::id), Some(2311));
    }

    // Tests rejection of repeated ids and mismatched sizes
    // Verified by skipping the seen-id check
    #[test]
    fn test_parse_rejects_inconsistent_tiles() {
        let repeated = "Tile 1:\n#.\n.#\n\nTile 1:\n##\n..";
        assert!(parse_tiles(repeated).is_err());
        let mixed = "Tile 1:\n#.\n.#\n\nTile 2:\n###\n...\n#.#";
        assert!(parse_tiles(mixed).is_err());
        assert!(parse_tiles("Tile x:\n#.\n.#").is_err());
        assert!(parse_tiles("").is_err());
    }
}
