//! Binary Boarding: seat ids from binary space partitioning codes

use bitvec::prelude::*;

use crate::io::error::{Result, invariant_error, parse_error};
use crate::io::input::lines;
use crate::puzzles::answer::Answers;

/// Number of distinct seat ids (128 rows of 8 seats)
pub const SEAT_COUNT: usize = 128 * 8;

/// Decode a boarding pass into its seat id (`row * 8 + column`)
///
/// `F`/`L` are 0 bits and `B`/`R` are 1 bits, so the whole 10-character
/// code is simply the binary seat id.
///
/// # Errors
///
/// Returns an error for a code that is not 7 row and 3 column letters
pub fn seat_id(pass: &str) -> Result<u16> {
    if pass.len() != 10 {
        return Err(parse_error(pass, &"boarding pass must have 10 letters"));
    }
    pass.chars().enumerate().try_fold(0_u16, |id, (index, c)| {
        let bit = match (index < 7, c) {
            (true, 'F') | (false, 'L') => 0,
            (true, 'B') | (false, 'R') => 1,
            _ => return Err(parse_error(pass, &format!("unexpected letter '{c}'"))),
        };
        Ok((id << 1) | bit)
    })
}

/// Decode every boarding pass
///
/// # Errors
///
/// Returns an error for the first malformed pass
pub fn parse(text: &str) -> Result<Vec<u16>> {
    lines(text).map(seat_id).collect()
}

/// Highest seat id
///
/// # Errors
///
/// Returns an error if there are no passes
pub fn part1(ids: &[u16]) -> Result<u16> {
    ids.iter()
        .copied()
        .max()
        .ok_or_else(|| invariant_error("highest seat", &"no boarding passes"))
}

/// The one free seat whose two neighbors are taken
///
/// # Errors
///
/// Returns an error if no such seat exists
pub fn part2(ids: &[u16]) -> Result<u16> {
    let mut taken = bitvec![0; SEAT_COUNT];
    for &id in ids {
        taken.set(usize::from(id), true);
    }

    let is_taken = |seat: usize| taken.get(seat).is_some_and(|bit| *bit);
    (1..SEAT_COUNT - 1)
        .find(|&seat| !is_taken(seat) && is_taken(seat - 1) && is_taken(seat + 1))
        .map(|seat| seat as u16)
        .ok_or_else(|| invariant_error("free seat", &"no free seat between two taken seats"))
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or there is no free seat
pub fn solve(text: &str) -> Result<Answers> {
    let ids = parse(text)?;
    Ok(Answers::new(part1(&ids)?, part2(&ids)?))
}
