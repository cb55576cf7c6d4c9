//! Docking Data: 36-bit bitmask program

use regex::Regex;
use std::collections::HashMap;

use crate::io::error::{Result, parse_error};
use crate::io::input::{captures, group, lines, parse_number};
use crate::puzzles::answer::Answers;

/// Width of values and addresses in bits
pub const WORD_BITS: u32 = 36;

const WORD_MASK: u64 = (1 << WORD_BITS) - 1;

/// A 36-character mask split into its three kinds of bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mask {
    /// Bits written as `1`
    pub ones: u64,
    /// Bits written as `0`
    pub zeros: u64,
    /// Bits written as `X`
    pub floating: u64,
}

impl Mask {
    /// Parse a mask string, most significant bit first
    ///
    /// # Errors
    ///
    /// Returns an error for a wrong length or a character other than `0`, `1`, `X`
    pub fn parse(text: &str, line: &str) -> Result<Self> {
        if text.len() != WORD_BITS as usize {
            return Err(parse_error(line, &format!("mask must have {WORD_BITS} bits")));
        }
        text.chars().try_fold(Self::default(), |mask, c| {
            let shifted = Self {
                ones: mask.ones << 1,
                zeros: mask.zeros << 1,
                floating: mask.floating << 1,
            };
            match c {
                '1' => Ok(Self {
                    ones: shifted.ones | 1,
                    ..shifted
                }),
                '0' => Ok(Self {
                    zeros: shifted.zeros | 1,
                    ..shifted
                }),
                'X' => Ok(Self {
                    floating: shifted.floating | 1,
                    ..shifted
                }),
                other => Err(parse_error(line, &format!("unexpected mask bit '{other}'"))),
            }
        })
    }

    /// Overwrite value bits with the mask's `0` and `1` bits
    pub const fn apply_to_value(self, value: u64) -> u64 {
        ((value & !self.zeros) | self.ones) & WORD_MASK
    }

    /// Every address produced by setting `1` bits and letting `X` bits float
    pub fn addresses(self, address: u64) -> Vec<u64> {
        let base = (address | self.ones) & !self.floating & WORD_MASK;
        // Enumerate all subsets of the floating bits
        let mut subset = 0_u64;
        let mut result = Vec::with_capacity(1 << self.floating.count_ones());
        loop {
            result.push(base | subset);
            if subset == self.floating {
                break;
            }
            subset = (subset.wrapping_sub(self.floating)) & self.floating;
        }
        result
    }
}

/// Program instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Replace the current mask
    SetMask(Mask),
    /// Write `value` to `address`
    Write {
        /// Target address before masking
        address: u64,
        /// Value before masking
        value: u64,
    },
}

/// Parse `mask = ...` and `mem[a] = v` lines
///
/// # Errors
///
/// Returns an error naming the first malformed line
pub fn parse(text: &str) -> Result<Vec<Instruction>> {
    let mask = Regex::new(r"^mask = ([01X]+)$")?;
    let write = Regex::new(r"^mem\[(\d+)\] = (\d+)$")?;

    lines(text)
        .map(|line| {
            if line.starts_with("mask") {
                let caps = captures(&mask, line)?;
                Ok(Instruction::SetMask(Mask::parse(group(&caps, 1), line)?))
            } else {
                let caps = captures(&write, line)?;
                Ok(Instruction::Write {
                    address: parse_number(group(&caps, 1), line)?,
                    value: parse_number(group(&caps, 2), line)?,
                })
            }
        })
        .collect()
}

/// Sum of memory after masking written values
pub fn part1(program: &[Instruction]) -> u64 {
    let mut memory: HashMap<u64, u64> = HashMap::new();
    let mut current = Mask::default();
    for &instruction in program {
        match instruction {
            Instruction::SetMask(mask) => current = mask,
            Instruction::Write { address, value } => {
                memory.insert(address, current.apply_to_value(value));
            }
        }
    }
    memory.values().sum()
}

/// Sum of memory after decoding addresses with floating bits
pub fn part2(program: &[Instruction]) -> u64 {
    let mut memory: HashMap<u64, u64> = HashMap::new();
    let mut current = Mask::default();
    for &instruction in program {
        match instruction {
            Instruction::SetMask(mask) => current = mask,
            Instruction::Write { address, value } => {
                for decoded in current.addresses(address) {
                    memory.insert(decoded, value);
                }
            }
        }
    }
    memory.values().sum()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let program = parse(text)?;
    Ok(Answers::new(part1(&program), part2(&program)))
}
