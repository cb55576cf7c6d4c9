//! Spiral Memory: positions on an outward square spiral

use std::collections::HashMap;

use crate::io::error::{Result, invalid_input};
use crate::io::input::parse_number;
use crate::puzzles::answer::Answers;

/// Parse the square number
///
/// # Errors
///
/// Returns an error unless the input is one positive integer
pub fn parse(text: &str) -> Result<u64> {
    let line = text.trim();
    let square: u64 = parse_number(line, line)?;
    if square == 0 {
        return Err(invalid_input(&"squares are numbered from 1"));
    }
    Ok(square)
}

/// Manhattan distance from `square` to square 1
///
/// Each ring ends in the bottom-right corner at an odd square `side²`; the
/// distance is half the side plus the offset from the middle of an edge.
pub const fn spiral_distance(square: u64) -> u64 {
    let mut side = 1;
    while side * side < square {
        side += 2;
    }
    if side == 1 {
        return 0;
    }
    let half = (side - 1) / 2;
    let to_corner = (side * side - square) % (side - 1);
    half + half.abs_diff(to_corner)
}

/// Cells of the spiral in fill order, starting at the origin
pub fn spiral() -> impl Iterator<Item = (i64, i64)> {
    const TURNS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    let legs = (1_i64..).flat_map(|length| [length, length]);
    let steps = legs
        .zip(TURNS.iter().cycle())
        .flat_map(|(length, &direction)| std::iter::repeat_n(direction, length as usize));
    std::iter::once((0, 0)).chain(steps.scan((0, 0), |position, (dx, dy)| {
        *position = (position.0 + dx, position.1 + dy);
        Some(*position)
    }))
}

/// First value written by the neighbor-sum spiral that exceeds `limit`
pub fn first_sum_above(limit: u64) -> u64 {
    let mut values: HashMap<(i64, i64), u64> = HashMap::from([((0, 0), 1)]);
    for (x, y) in spiral().skip(1) {
        let value: u64 = (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (x + dx, y + dy)))
            .filter_map(|neighbor| values.get(&neighbor))
            .sum();
        if value > limit {
            return value;
        }
        values.insert((x, y), value);
    }
    // the spiral never ends
    0
}

/// Steps carrying data from `square` to the access port
pub const fn part1(square: u64) -> u64 {
    spiral_distance(square)
}

/// First stress-test value larger than the input
pub fn part2(square: u64) -> u64 {
    first_sum_above(square)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let square = parse(text)?;
    Ok(Answers::new(part1(square), part2(square)))
}
