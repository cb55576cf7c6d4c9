//! Tests for greedy tile placement

#[cfg(test)]
mod tests {
    use advent::algorithm::arrangement::{
        arrange, borders_agree, expected_neighbors, fits, grid_side, orient_corner,
    };
    use advent::spatial::grid::{BoolGrid, Orientation};
    use advent::spatial::tiles::{Tile, parse_tiles};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    const SAMPLE: &str = include_str!("../../data/year2020/day20.txt");
    const CORNER_PRODUCT: u64 = 20_899_048_083_289;

    fn sample_tiles() -> Vec<Tile> {
        parse_tiles(SAMPLE).expect("sample parses")
    }

    // Tests the square side computation
    // Verified by returning the rounded root without squaring it back
    #[test]
    fn test_grid_side() {
        assert_eq!(grid_side(9).ok(), Some(3));
        assert_eq!(grid_side(144).ok(), Some(12));
        assert_eq!(grid_side(1).ok(), Some(1));
        assert!(grid_side(0).is_err());
        assert!(grid_side(8).is_err());
    }

    // Tests neighbor counts for corner, edge and interior cells
    // Verified by counting only the row bounds
    #[test]
    fn test_expected_neighbors() {
        assert_eq!(expected_neighbors(0, 0, 3), 2);
        assert_eq!(expected_neighbors(0, 1, 3), 3);
        assert_eq!(expected_neighbors(1, 1, 3), 4);
        assert_eq!(expected_neighbors(2, 2, 3), 2);
        assert_eq!(expected_neighbors(0, 0, 1), 0);
    }

    // Tests the fit check against the tile above and to the left
    // Verified by comparing against the neighbor's first row
    #[test]
    fn test_fits_compares_touching_rows_and_columns() {
        let above = BoolGrid::parse("...\n...\n#.#").expect("valid grid");
        let left = BoolGrid::parse("..#\n...\n..#").expect("valid grid");
        let candidate = BoolGrid::parse("#.#\n...\n#..").expect("valid grid");

        assert!(fits(&candidate, Some(&above), None));
        assert!(fits(&candidate, None, Some(&left)));
        assert!(fits(&candidate, Some(&above), Some(&left)));
        assert!(!fits(&candidate.flip(), Some(&above), Some(&left)));
        assert!(fits(&candidate, None, None));
    }

    // Tests that the sample arranges into a 3x3 grid using every tile once
    // Verified by allowing a tile to be reused
    #[test]
    fn test_sample_arrangement() {
        let tiles = sample_tiles();
        let arrangement = arrange(&tiles).expect("sample arranges");

        assert_eq!(arrangement.side(), 3);
        let placed: BTreeSet<u64> = arrangement.ids().into_iter().flatten().collect();
        let input: BTreeSet<u64> = tiles.iter().map(Tile::id).collect();
        assert_eq!(placed, input);
        assert_eq!(arrangement.corners(), vec![1171, 1951, 2971, 3079]);
        assert_eq!(arrangement.corner_product().ok(), Some(CORNER_PRODUCT));
        assert!(borders_agree(&arrangement));
    }

    // Tests that the starting corner is the smallest corner id, turned with unmatched sides up and left
    // Verified by picking the largest corner id
    #[test]
    fn test_arrangement_starts_at_smallest_corner() {
        let arrangement = arrange(&sample_tiles()).expect("sample arranges");
        assert_eq!(arrangement.get(0, 0).map(|placed| placed.id), Some(1171));
        assert!(arrangement.get(3, 0).is_none());
    }

    // Tests that shuffling and re-orienting the input does not change the result
    // Verified by skipping flipped orientations in orient_to_fit
    #[test]
    fn test_arrangement_is_independent_of_input_order_and_orientation() {
        let mut rng = StdRng::seed_from_u64(2020);
        for _ in 0..10 {
            let mut tiles: Vec<Tile> = sample_tiles()
                .into_iter()
                .map(|tile| {
                    let orientation = Orientation::ALL[rng.random_range(0..8)];
                    Tile::new(tile.id(), tile.oriented(orientation)).expect("square tile")
                })
                .collect();
            tiles.shuffle(&mut rng);

            let arrangement = arrange(&tiles).expect("shuffled sample arranges");
            assert_eq!(arrangement.corner_product().ok(), Some(CORNER_PRODUCT));
            assert!(borders_agree(&arrangement));
        }
    }

    // Tests that a correctly oriented corner is returned unchanged
    // Verified by always applying one quarter turn
    #[test]
    fn test_orient_corner_is_idempotent() {
        let tiles = sample_tiles();
        let arrangement = arrange(&tiles).expect("sample arranges");
        let corner = arrangement.get(0, 0).expect("corner placed");
        let oriented = Tile::new(corner.id, corner.grid.clone()).expect("square tile");

        let neighbor_ids: Vec<u64> = [(0, 1), (1, 0)]
            .iter()
            .filter_map(|&(r, c)| arrangement.get(r, c).map(|placed| placed.id))
            .collect();
        let neighbors: Vec<&Tile> = tiles
            .iter()
            .filter(|tile| neighbor_ids.contains(&tile.id()))
            .collect();

        let (orientation, grid) = orient_corner(&oriented, &neighbors).expect("corner orients");
        assert_eq!(orientation, Orientation::IDENTITY);
        assert_eq!(&grid, oriented.grid());
    }

    // Tests rejection of tile counts that do not form a square
    // Verified by flooring the square root
    #[test]
    fn test_non_square_count_fails() {
        let tiles: Vec<Tile> = sample_tiles().into_iter().take(8).collect();
        assert!(arrange(&tiles).is_err());
        assert!(arrange(&[]).is_err());
    }

    // Tests that unrelated tiles cannot be arranged
    // Verified by accepting the first unused candidate without a fit check
    #[test]
    fn test_unmatched_tiles_fail() {
        let distinct = [
            ".#.#\n..#.\n##.#\n##..",
            "###.\n.##.\n.##.\n###.",
            ".#..\n#.##\n.#.#\n.#..",
            "####\n#..#\n##.#\n##.#",
        ];
        let tiles: Vec<Tile> = distinct
            .iter()
            .zip(1..)
            .map(|(text, id)| {
                Tile::new(id, BoolGrid::parse(text).expect("valid grid")).expect("square tile")
            })
            .collect();
        assert!(arrange(&tiles).is_err());
    }

    // Tests that a single tile is its own arrangement
    // Verified by requiring a two-neighbor corner for every grid size
    #[test]
    fn test_single_tile() {
        let tile = Tile::new(42, BoolGrid::parse("#.\n..").expect("valid grid")).expect("square tile");
        let arrangement = arrange(&[tile]).expect("one tile arranges");
        assert_eq!(arrangement.ids(), vec![vec![42]]);
        assert_eq!(arrangement.corner_product().ok(), Some(42));
    }
}
