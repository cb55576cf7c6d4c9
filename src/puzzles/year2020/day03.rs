//! Toboggan Trajectory: trees hit on a horizontally repeating map

use crate::io::error::Result;
use crate::puzzles::answer::Answers;
use crate::spatial::grid::BoolGrid;

/// Slopes checked in part 2 as (right, down)
pub const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

/// Parse the map, `#` marking a tree
///
/// # Errors
///
/// Returns an error for unexpected characters or ragged rows
pub fn parse(text: &str) -> Result<BoolGrid> {
    BoolGrid::parse(text)
}

/// Trees hit going `right` columns and `down` rows per step from the top-left
pub fn trees_on_slope(map: &BoolGrid, right: usize, down: usize) -> usize {
    if map.cols() == 0 || down == 0 {
        return 0;
    }
    (0..map.rows())
        .step_by(down)
        .enumerate()
        .filter(|&(step, row)| map.is_active(row, step * right % map.cols()))
        .count()
}

/// Trees hit on slope right 3, down 1
pub fn part1(map: &BoolGrid) -> usize {
    trees_on_slope(map, 3, 1)
}

/// Product of trees hit over all [`SLOPES`]
pub fn part2(map: &BoolGrid) -> u64 {
    SLOPES
        .iter()
        .map(|&(right, down)| trees_on_slope(map, right, down) as u64)
        .product()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let map = parse(text)?;
    Ok(Answers::new(part1(&map), part2(&map)))
}
