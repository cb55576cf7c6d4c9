//! Knot Hash: twisting a circular list of marks

use std::fmt::Write;

use crate::io::configuration::{KNOT_HASH_ROUNDS, KNOT_HASH_SUFFIX, KNOT_RING_SIZE};
use crate::io::error::{Result, invalid_input};
use crate::io::input::numbers;
use crate::puzzles::answer::Answers;

/// Marks XORed together into one byte of the dense hash
pub const BLOCK_SIZE: usize = 16;

/// A ring of marks together with the current position and skip size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnotState {
    marks: Vec<usize>,
    position: usize,
    skip: usize,
}

impl KnotState {
    /// Marks `0..size` in order
    pub fn new(size: usize) -> Self {
        Self {
            marks: (0..size).collect(),
            position: 0,
            skip: 0,
        }
    }

    /// Current marks, starting from the ring's first element
    pub fn marks(&self) -> &[usize] {
        &self.marks
    }

    /// Reverse `length` marks from the current position, then move on
    pub fn twist(&mut self, length: usize) {
        let size = self.marks.len();
        if size == 0 {
            return;
        }
        for offset in 0..length / 2 {
            let a = (self.position + offset) % size;
            let b = (self.position + length - 1 - offset) % size;
            self.marks.swap(a, b);
        }
        self.position = (self.position + length + self.skip) % size;
        self.skip += 1;
    }

    /// Apply every length once
    pub fn round(&mut self, lengths: &[usize]) {
        for &length in lengths {
            self.twist(length);
        }
    }
}

/// Product of the first two marks after one round on a ring of `size`
///
/// # Errors
///
/// Returns an error if a length exceeds the ring or the ring has fewer than
/// two marks
pub fn check_product(lengths: &[usize], size: usize) -> Result<usize> {
    if let Some(length) = lengths.iter().find(|&&length| length > size) {
        return Err(invalid_input(&format!(
            "length {length} exceeds the ring of {size} marks"
        )));
    }
    let mut state = KnotState::new(size);
    state.round(lengths);
    match state.marks() {
        [first, second, ..] => Ok(first * second),
        _ => Err(invalid_input(&format!("a ring of {size} marks has no product"))),
    }
}

/// Full knot hash of `input` as 32 lowercase hex digits
pub fn knot_hash(input: &str) -> String {
    let lengths: Vec<usize> = input
        .bytes()
        .map(usize::from)
        .chain(KNOT_HASH_SUFFIX)
        .collect();

    let mut state = KnotState::new(KNOT_RING_SIZE);
    for _ in 0..KNOT_HASH_ROUNDS {
        state.round(&lengths);
    }

    state
        .marks()
        .chunks(BLOCK_SIZE)
        .map(|block| block.iter().fold(0, |acc, &mark| acc ^ mark))
        .fold(String::new(), |mut digest, byte| {
            let _ = write!(digest, "{byte:02x}");
            digest
        })
}

/// Keep the raw line; the two parts read it differently
///
/// # Errors
///
/// Never fails; the signature matches the other days
pub fn parse(text: &str) -> Result<String> {
    Ok(text.trim().to_string())
}

/// Product of the first two marks after one round
///
/// # Errors
///
/// Returns an error if the line is not a list of valid lengths
pub fn part1(line: &str) -> Result<usize> {
    let lengths: Vec<usize> = numbers(line)?;
    check_product(&lengths, KNOT_RING_SIZE)
}

/// Hex digest of the full hash
pub fn part2(line: &str) -> String {
    knot_hash(line)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if the line is not a list of valid lengths
pub fn solve(text: &str) -> Result<Answers> {
    let line = parse(text)?;
    Ok(Answers::new(part1(&line)?, part2(&line)))
}
