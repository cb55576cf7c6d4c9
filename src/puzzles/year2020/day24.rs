//! Lobby Layout: flipping hexagonal floor tiles

use std::collections::{HashMap, HashSet};

use crate::io::configuration::HEX_FLOOR_DAYS;
use crate::io::error::Result;
use crate::io::input::lines;
use crate::puzzles::answer::Answers;
use crate::spatial::hex::{HexCoord, HexDirection};

/// Split a run of `e se sw w nw ne` tokens written without separators
///
/// # Errors
///
/// Returns an error for a character that starts no direction
pub fn parse_path(line: &str) -> Result<Vec<HexDirection>> {
    let mut directions = Vec::new();
    let mut rest = line;
    while let Some(first) = rest.chars().next() {
        let width = if matches!(first, 'n' | 's') { 2 } else { first.len_utf8() };
        let token = rest.get(..width).unwrap_or(rest);
        directions.push(HexDirection::from_pointy(token)?);
        rest = rest.get(token.len()..).unwrap_or_default();
    }
    Ok(directions)
}

/// Parse one path per line
///
/// # Errors
///
/// Returns an error for an unknown direction
pub fn parse(text: &str) -> Result<Vec<Vec<HexDirection>>> {
    lines(text).map(parse_path).collect()
}

/// Tiles left black after flipping the endpoint of every path
pub fn initial_floor(paths: &[Vec<HexDirection>]) -> HashSet<HexCoord> {
    let mut black = HashSet::new();
    for path in paths {
        let tile = path
            .iter()
            .fold(HexCoord::ORIGIN, |position, &direction| position + direction);
        if !black.remove(&tile) {
            black.insert(tile);
        }
    }
    black
}

/// One day of the floor exhibit
///
/// Black tiles stay black with one or two black neighbors; white tiles
/// turn black with exactly two.
pub fn step(black: &HashSet<HexCoord>) -> HashSet<HexCoord> {
    let mut counts: HashMap<HexCoord, usize> = HashMap::new();
    for tile in black {
        for neighbor in tile.neighbors() {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(tile, count)| *count == 2 || (*count == 1 && black.contains(tile)))
        .map(|(tile, _)| tile)
        .collect()
}

/// Floor after `days` days
pub fn floor_after(black: &HashSet<HexCoord>, days: usize) -> HashSet<HexCoord> {
    (0..days).fold(black.clone(), |floor, _| step(&floor))
}

/// Number of black tiles after the initial flips
pub fn part1(paths: &[Vec<HexDirection>]) -> usize {
    initial_floor(paths).len()
}

/// Number of black tiles after the exhibit has run
pub fn part2(paths: &[Vec<HexDirection>]) -> usize {
    floor_after(&initial_floor(paths), HEX_FLOOR_DAYS).len()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let paths = parse(text)?;
    Ok(Answers::new(part1(&paths), part2(&paths)))
}
