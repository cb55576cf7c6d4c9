//! Seating System: a seat-filling automaton run until it stabilizes

use ndarray::Array2;

use crate::io::error::{Result, invalid_input, parse_error};
use crate::io::input::lines;
use crate::puzzles::answer::Answers;

/// One position of the waiting area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No seat
    Floor,
    /// Empty seat
    Empty,
    /// Occupied seat
    Occupied,
}

/// How a seat counts the occupied seats around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// The eight touching cells
    Adjacent,
    /// The first seat visible in each of the eight directions
    LineOfSight,
}

impl Neighborhood {
    /// Occupied count at which an occupied seat is vacated
    pub const fn tolerance(self) -> usize {
        match self {
            Self::Adjacent => 4,
            Self::LineOfSight => 5,
        }
    }
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Parse `.`, `L` and `#` cells
///
/// # Errors
///
/// Returns an error for other characters or ragged rows
pub fn parse(text: &str) -> Result<Array2<Cell>> {
    let rows = lines(text)
        .map(|line| {
            line.chars()
                .map(|c| match c {
                    '.' => Ok(Cell::Floor),
                    'L' => Ok(Cell::Empty),
                    '#' => Ok(Cell::Occupied),
                    other => Err(parse_error(line, &format!("unexpected cell '{other}'"))),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let width = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != width) {
        return Err(invalid_input(&"seat rows differ in length"));
    }
    let height = rows.len();
    Array2::from_shape_vec((height, width), rows.into_iter().flatten().collect())
        .map_err(|e| invalid_input(&format!("seat layout shape: {e}")))
}

fn step_from(
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
    distance: usize,
) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr.checked_mul(distance as isize)?)?;
    let c = col.checked_add_signed(dc.checked_mul(distance as isize)?)?;
    Some((r, c))
}

fn occupied_around(seats: &Array2<Cell>, at: (usize, usize), neighborhood: Neighborhood) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&direction| {
            let mut distance = 1;
            loop {
                let cell = step_from(at, direction, distance).and_then(|p| seats.get(p));
                match (cell, neighborhood) {
                    (Some(Cell::Occupied), _) => return true,
                    (Some(Cell::Floor), Neighborhood::LineOfSight) => distance += 1,
                    _ => return false,
                }
            }
        })
        .count()
}

/// Apply one round of the rules; returns the new layout and whether anything changed
pub fn step(seats: &Array2<Cell>, neighborhood: Neighborhood) -> (Array2<Cell>, bool) {
    let mut changed = false;
    let next = Array2::from_shape_fn(seats.dim(), |at| {
        let cell = seats.get(at).copied().unwrap_or(Cell::Floor);
        let updated = match cell {
            Cell::Empty if occupied_around(seats, at, neighborhood) == 0 => Cell::Occupied,
            Cell::Occupied if occupied_around(seats, at, neighborhood) >= neighborhood.tolerance() => {
                Cell::Empty
            }
            other => other,
        };
        changed |= updated != cell;
        updated
    });
    (next, changed)
}

/// Occupied seats once the layout stops changing
pub fn stable_occupancy(seats: &Array2<Cell>, neighborhood: Neighborhood) -> usize {
    let mut current = seats.clone();
    loop {
        let (next, changed) = step(&current, neighborhood);
        if !changed {
            return next.iter().filter(|&&cell| cell == Cell::Occupied).count();
        }
        current = next;
    }
}

/// Stable occupancy counting adjacent seats
pub fn part1(seats: &Array2<Cell>) -> usize {
    stable_occupancy(seats, Neighborhood::Adjacent)
}

/// Stable occupancy counting visible seats
pub fn part2(seats: &Array2<Cell>) -> usize {
    stable_occupancy(seats, Neighborhood::LineOfSight)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let seats = parse(text)?;
    Ok(Answers::new(part1(&seats), part2(&seats)))
}
