//! Tests for PNG rendering of reassembled images

#[cfg(test)]
mod tests {
    use advent::io::configuration::{ACTIVE_COLOR, HIGHLIGHT_COLOR, INACTIVE_COLOR};
    use advent::io::image::{export_image_as_png, render_image};
    use advent::spatial::grid::BoolGrid;
    use image::Rgba;
    use std::collections::HashSet;

    // Tests one pixel per cell with highlight taking priority
    // Verified by swapping row and column when writing pixels
    #[test]
    fn test_render_colors() {
        let grid = BoolGrid::parse("#..\n.##").expect("valid grid");
        let highlight: HashSet<(usize, usize)> = [(1, 2)].into_iter().collect();
        let img = render_image(&grid, &highlight).expect("grid renders");

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(*img.get_pixel(0, 0), Rgba(ACTIVE_COLOR));
        assert_eq!(*img.get_pixel(1, 0), Rgba(INACTIVE_COLOR));
        assert_eq!(*img.get_pixel(1, 1), Rgba(ACTIVE_COLOR));
        assert_eq!(*img.get_pixel(2, 1), Rgba(HIGHLIGHT_COLOR));
    }

    // Tests that empty grids are refused
    // Verified by creating a zero-sized buffer
    #[test]
    fn test_render_empty_grid_fails() {
        let empty = BoolGrid::parse("##\n##").expect("valid grid").inner();
        assert!(render_image(&empty, &HashSet::new()).is_err());
    }

    // Tests export into a directory that does not exist yet
    // Verified by saving without creating parent directories
    #[test]
    fn test_export_creates_parents() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("renders").join("image.png");
        let grid = BoolGrid::parse("#.\n.#").expect("valid grid");

        export_image_as_png(&grid, &HashSet::new(), &path).expect("image exports");

        let saved = image::open(&path).expect("png reads back").to_rgba8();
        assert_eq!(saved.dimensions(), (2, 2));
        assert_eq!(*saved.get_pixel(1, 1), Rgba(ACTIVE_COLOR));
    }
}
