//! Hex Ed: walking a flat-topped hex grid

use crate::io::error::Result;
use crate::puzzles::answer::Answers;
use crate::spatial::hex::{HexCoord, HexDirection};

/// Parse comma separated `n ne se s sw nw` steps
///
/// # Errors
///
/// Returns an error for an unknown direction
pub fn parse(text: &str) -> Result<Vec<HexDirection>> {
    text.trim()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(HexDirection::from_flat)
        .collect()
}

/// Every cell visited, starting at the origin
pub fn waypoints(path: &[HexDirection]) -> impl Iterator<Item = HexCoord> + '_ {
    std::iter::once(HexCoord::ORIGIN).chain(path.iter().scan(HexCoord::ORIGIN, |position, &step| {
        *position += step;
        Some(*position)
    }))
}

/// Distance from the origin at the end of the path
pub fn part1(path: &[HexDirection]) -> u64 {
    waypoints(path)
        .last()
        .map_or(0, HexCoord::distance_from_origin)
}

/// Furthest distance from the origin along the path
pub fn part2(path: &[HexDirection]) -> u64 {
    waypoints(path)
        .map(HexCoord::distance_from_origin)
        .max()
        .unwrap_or(0)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let path = parse(text)?;
    Ok(Answers::new(part1(&path), part2(&path)))
}
