//! Shuttle Search: bus timetables and aligned departures

use crate::io::error::{Result, invalid_input, invariant_error};
use crate::io::input::{lines, parse_number};
use crate::math::modular::chinese_remainder;
use crate::puzzles::answer::Answers;

/// Earliest departure and the bus schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes {
    /// Earliest time we can depart
    pub earliest: u64,
    /// Bus ids by schedule position; `None` for `x`
    pub buses: Vec<Option<u64>>,
}

/// Parse the timestamp line and the comma separated schedule line
///
/// # Errors
///
/// Returns an error if a line is missing or a bus id is not a positive integer
pub fn parse(text: &str) -> Result<Notes> {
    let mut input = lines(text);
    let (Some(first), Some(second)) = (input.next(), input.next()) else {
        return Err(invalid_input(&"expected a timestamp line and a schedule line"));
    };

    let earliest = parse_number(first, first)?;
    let buses = second
        .split(',')
        .map(|entry| match entry.trim() {
            "x" => Ok(None),
            id => match parse_number::<u64>(id, second)? {
                0 => Err(invalid_input(&"bus id 0 never departs")),
                period => Ok(Some(period)),
            },
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Notes { earliest, buses })
}

/// Minutes from `time` until the next departure of a bus with `period`
pub const fn wait_time(time: u64, period: u64) -> u64 {
    (period - time % period) % period
}

/// Id of the first bus to leave times the minutes waited for it
///
/// # Errors
///
/// Returns an error if the schedule has no buses
pub fn part1(notes: &Notes) -> Result<u64> {
    notes
        .buses
        .iter()
        .flatten()
        .map(|&period| (period, wait_time(notes.earliest, period)))
        .min_by_key(|&(_, wait)| wait)
        .map(|(period, wait)| period * wait)
        .ok_or_else(|| invariant_error("bus search", &"schedule lists no buses"))
}

/// Earliest time `t` such that the bus at position `i` departs at `t + i`
///
/// # Errors
///
/// Returns an error if the bus ids are not pairwise coprime
pub fn part2(notes: &Notes) -> Result<i128> {
    let congruences: Vec<(i128, i128)> = notes
        .buses
        .iter()
        .enumerate()
        .filter_map(|(offset, bus)| bus.map(|period| (offset as i128, i128::from(period))))
        .map(|(offset, period)| ((-offset).rem_euclid(period), period))
        .collect();
    chinese_remainder(&congruences).map(|(time, _)| time)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or either part has no answer
pub fn solve(text: &str) -> Result<Answers> {
    let notes = parse(text)?;
    Ok(Answers::new(part1(&notes)?, part2(&notes)?))
}
