//! Conway Cubes: a Game of Life in three and four dimensions

use itertools::Itertools;
use std::collections::{HashMap, HashSet};

use crate::io::configuration::CONWAY_CYCLES;
use crate::io::error::Result;
use crate::puzzles::answer::Answers;
use crate::spatial::grid::BoolGrid;

/// A cube position; unused trailing axes stay 0
pub type Point = [i64; 4];

/// Active cubes of the initial 2D slice, placed at z = w = 0
///
/// # Errors
///
/// Returns an error for unexpected characters or ragged rows
pub fn parse(text: &str) -> Result<HashSet<Point>> {
    let slice = BoolGrid::parse(text)?;
    Ok(slice
        .as_array()
        .indexed_iter()
        .filter(|&(_, &active)| active)
        .map(|((row, col), _)| [row as i64, col as i64, 0, 0])
        .collect())
}

/// Offsets to all neighbors using the first `dimensions` axes
pub fn neighbor_offsets(dimensions: usize) -> Vec<Point> {
    (0..4)
        .map(|axis| if axis < dimensions { -1..=1 } else { 0..=0 })
        .multi_cartesian_product()
        .filter(|offset| offset.iter().any(|&d| d != 0))
        .map(|offset| {
            let mut point = [0; 4];
            for (slot, d) in point.iter_mut().zip(offset) {
                *slot = d;
            }
            point
        })
        .collect()
}

/// One cycle: a cube is active next if it has exactly 3 active neighbors,
/// or 2 and is already active
pub fn step(active: &HashSet<Point>, offsets: &[Point]) -> HashSet<Point> {
    let mut counts: HashMap<Point, usize> = HashMap::new();
    for point in active {
        for offset in offsets {
            let mut neighbor = *point;
            for (coordinate, d) in neighbor.iter_mut().zip(offset) {
                *coordinate += d;
            }
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(point, count)| *count == 3 || (*count == 2 && active.contains(point)))
        .map(|(point, _)| point)
        .collect()
}

/// Active cubes after `cycles` cycles in `dimensions` dimensions
pub fn simulate(initial: &HashSet<Point>, dimensions: usize, cycles: usize) -> usize {
    let offsets = neighbor_offsets(dimensions);
    (0..cycles)
        .fold(initial.clone(), |active, _| step(&active, &offsets))
        .len()
}

/// Active cubes after six cycles in 3D
pub fn part1(initial: &HashSet<Point>) -> usize {
    simulate(initial, 3, CONWAY_CYCLES)
}

/// Active cubes after six cycles in 4D
pub fn part2(initial: &HashSet<Point>) -> usize {
    simulate(initial, 4, CONWAY_CYCLES)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let initial = parse(text)?;
    Ok(Answers::new(part1(&initial), part2(&initial)))
}
