//! Rain Risk: ferry navigation by heading and by waypoint

use crate::io::error::{Result, parse_error};
use crate::io::input::{lines, parse_number};
use crate::puzzles::answer::Answers;

/// A navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move north
    North(i64),
    /// Move south
    South(i64),
    /// Move east
    East(i64),
    /// Move west
    West(i64),
    /// Turn counter-clockwise by a number of quarter turns
    Left(u8),
    /// Turn clockwise by a number of quarter turns
    Right(u8),
    /// Move forward along the heading or towards the waypoint
    Forward(i64),
}

/// Parse `<letter><number>` lines; turns must be 0, 90, 180 or 270 degrees
///
/// # Errors
///
/// Returns an error for an unknown action or an unsupported turn
pub fn parse(text: &str) -> Result<Vec<Action>> {
    lines(text)
        .map(|line| {
            let mut chars = line.chars();
            let letter = chars
                .next()
                .ok_or_else(|| parse_error(line, &"empty instruction"))?;
            let value: i64 = parse_number(chars.as_str(), line)?;
            let quarter_turns = || match value {
                0 | 90 | 180 | 270 => Ok((value / 90) as u8),
                _ => Err(parse_error(
                    line,
                    &format!("turn of {value} degrees is not a reduced multiple of 90"),
                )),
            };
            Ok(match letter {
                'N' => Action::North(value),
                'S' => Action::South(value),
                'E' => Action::East(value),
                'W' => Action::West(value),
                'L' => Action::Left(quarter_turns()?),
                'R' => Action::Right(quarter_turns()?),
                'F' => Action::Forward(value),
                other => return Err(parse_error(line, &format!("unknown action '{other}'"))),
            })
        })
        .collect()
}

/// A position or offset as (north, east)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vector {
    /// Northward component
    pub north: i64,
    /// Eastward component
    pub east: i64,
}

impl Vector {
    /// Create a vector
    pub const fn new(north: i64, east: i64) -> Self {
        Self { north, east }
    }

    /// Rotate counter-clockwise by `quarter_turns` quarter turns
    #[must_use]
    pub const fn rotate_left(self, quarter_turns: u8) -> Self {
        match quarter_turns % 4 {
            0 => self,
            1 => Self::new(self.east, -self.north),
            2 => Self::new(-self.north, -self.east),
            _ => Self::new(-self.east, self.north),
        }
    }

    /// Rotate clockwise by `quarter_turns` quarter turns
    #[must_use]
    pub const fn rotate_right(self, quarter_turns: u8) -> Self {
        self.rotate_left((4 - quarter_turns % 4) % 4)
    }

    /// Move `distance` units along `unit`
    #[must_use]
    pub const fn advanced(self, unit: Self, distance: i64) -> Self {
        Self::new(self.north + unit.north * distance, self.east + unit.east * distance)
    }

    /// Manhattan distance from the origin
    pub const fn manhattan(self) -> u64 {
        self.north.unsigned_abs() + self.east.unsigned_abs()
    }
}

const NORTH: Vector = Vector::new(1, 0);
const SOUTH: Vector = Vector::new(-1, 0);
const EAST: Vector = Vector::new(0, 1);
const WEST: Vector = Vector::new(0, -1);

/// Navigate with `N/S/E/W` moving the ship and `L/R` turning its heading
pub fn part1(actions: &[Action]) -> u64 {
    let mut ship = Vector::default();
    let mut heading = EAST;
    for &action in actions {
        match action {
            Action::North(d) => ship = ship.advanced(NORTH, d),
            Action::South(d) => ship = ship.advanced(SOUTH, d),
            Action::East(d) => ship = ship.advanced(EAST, d),
            Action::West(d) => ship = ship.advanced(WEST, d),
            Action::Left(turns) => heading = heading.rotate_left(turns),
            Action::Right(turns) => heading = heading.rotate_right(turns),
            Action::Forward(d) => ship = ship.advanced(heading, d),
        }
    }
    ship.manhattan()
}

/// Navigate with `N/S/E/W` moving a waypoint that starts 10 east, 1 north
pub fn part2(actions: &[Action]) -> u64 {
    let mut ship = Vector::default();
    let mut waypoint = Vector::new(1, 10);
    for &action in actions {
        match action {
            Action::North(d) => waypoint = waypoint.advanced(NORTH, d),
            Action::South(d) => waypoint = waypoint.advanced(SOUTH, d),
            Action::East(d) => waypoint = waypoint.advanced(EAST, d),
            Action::West(d) => waypoint = waypoint.advanced(WEST, d),
            Action::Left(turns) => waypoint = waypoint.rotate_left(turns),
            Action::Right(turns) => waypoint = waypoint.rotate_right(turns),
            Action::Forward(d) => ship = ship.advanced(waypoint, d),
        }
    }
    ship.manhattan()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let actions = parse(text)?;
    Ok(Answers::new(part1(&actions), part2(&actions)))
}
