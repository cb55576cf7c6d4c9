//! Tests for joining tile interiors

#[cfg(test)]
mod tests {
    use advent::algorithm::arrangement::arrange;
    use advent::algorithm::stitching::stitch;
    use advent::spatial::grid::BoolGrid;
    use advent::spatial::tiles::{Tile, parse_tiles};

    const SAMPLE: &str = include_str!("../../data/year2020/day20.txt");

    // Tests the stitched sample size and active cell count
    // Verified by keeping tile borders in the image
    #[test]
    fn test_sample_stitch() {
        let tiles = parse_tiles(SAMPLE).expect("sample parses");
        let image = stitch(&arrange(&tiles).expect("sample arranges")).expect("sample stitches");

        assert_eq!(image.rows(), 24);
        assert_eq!(image.cols(), 24);
        assert_eq!(image.count_active(), 303);
    }

    // Tests that a single tile stitches to its interior
    // Verified by slicing one cell too far on each side
    #[test]
    fn test_single_tile_interior() {
        let grid = BoolGrid::parse("####\n#.##\n##.#\n####").expect("valid grid");
        let tile = Tile::new(7, grid.clone()).expect("square tile");
        let image = stitch(&arrange(&[tile]).expect("one tile arranges")).expect("tile stitches");

        assert_eq!(image, grid.inner());
        assert_eq!(image.to_string(), ".#\n#.");
    }

    // Tests that every tile interior lands in its own block of the image
    // Verified by swapping the row and column offsets of each block
    #[test]
    fn test_blocks_follow_grid_positions() {
        let tiles = parse_tiles(SAMPLE).expect("sample parses");
        let arrangement = arrange(&tiles).expect("sample arranges");
        let image = stitch(&arrangement).expect("sample stitches");

        for (row, placed_row) in arrangement.rows().enumerate() {
            for (col, placed) in placed_row.iter().enumerate() {
                let inner = placed.grid.inner();
                for r in 0..8 {
                    for c in 0..8 {
                        assert_eq!(image.get(row * 8 + r, col * 8 + c), inner.get(r, c));
                    }
                }
            }
        }
    }
}
