//! Handheld Halting: a three-instruction boot program

use bitvec::prelude::*;

use crate::io::error::{Result, invariant_error, parse_error};
use crate::io::input::{lines, parse_number};
use crate::puzzles::answer::Answers;

/// Boot code operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add the argument to the accumulator
    Acc,
    /// Jump by the argument
    Jmp,
    /// Do nothing
    Nop,
}

/// One instruction and its signed argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// What the instruction does
    pub operation: Operation,
    /// Signed argument
    pub argument: i64,
}

impl Instruction {
    /// The instruction with `jmp` and `nop` swapped; `acc` cannot be repaired
    pub const fn repaired(self) -> Option<Self> {
        let operation = match self.operation {
            Operation::Acc => return None,
            Operation::Jmp => Operation::Nop,
            Operation::Nop => Operation::Jmp,
        };
        Some(Self {
            operation,
            argument: self.argument,
        })
    }
}

/// How a run of the program ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// An instruction was about to run a second time
    Looped {
        /// Accumulator before the repeated instruction
        accumulator: i64,
    },
    /// Execution reached the instruction just past the end
    Terminated {
        /// Final accumulator
        accumulator: i64,
    },
    /// A jump left the program anywhere other than just past the end
    OutOfBounds {
        /// Accumulator at the bad jump
        accumulator: i64,
    },
}

/// Parse `op ±n` lines
///
/// # Errors
///
/// Returns an error for an unknown operation or a bad argument
pub fn parse(text: &str) -> Result<Vec<Instruction>> {
    lines(text)
        .map(|line| {
            let (op, argument) = line
                .split_once(' ')
                .ok_or_else(|| parse_error(line, &"expected operation and argument"))?;
            let operation = match op {
                "acc" => Operation::Acc,
                "jmp" => Operation::Jmp,
                "nop" => Operation::Nop,
                other => return Err(parse_error(line, &format!("unknown operation '{other}'"))),
            };
            Ok(Instruction {
                operation,
                argument: parse_number(argument.trim_start_matches('+'), line)?,
            })
        })
        .collect()
}

/// Run until an instruction repeats or execution leaves the program
pub fn run(program: &[Instruction]) -> Exit {
    let mut executed = bitvec![0; program.len()];
    let mut accumulator = 0;
    let mut pointer: i64 = 0;

    loop {
        if pointer == program.len() as i64 {
            return Exit::Terminated { accumulator };
        }
        let Some(index) = usize::try_from(pointer).ok().filter(|&i| i < program.len()) else {
            return Exit::OutOfBounds { accumulator };
        };
        if executed.get(index).is_some_and(|bit| *bit) {
            return Exit::Looped { accumulator };
        }
        executed.set(index, true);

        let Some(instruction) = program.get(index) else {
            return Exit::OutOfBounds { accumulator };
        };
        match instruction.operation {
            Operation::Acc => {
                accumulator += instruction.argument;
                pointer += 1;
            }
            Operation::Jmp => pointer += instruction.argument,
            Operation::Nop => pointer += 1,
        }
    }
}

/// Accumulator just before any instruction runs twice
///
/// # Errors
///
/// Returns an error if the program does not loop
pub fn part1(program: &[Instruction]) -> Result<i64> {
    match run(program) {
        Exit::Looped { accumulator } => Ok(accumulator),
        other => Err(invariant_error(
            "loop detection",
            &format!("program does not loop: {other:?}"),
        )),
    }
}

/// Accumulator after the single `jmp`/`nop` swap that makes the program terminate
///
/// # Errors
///
/// Returns an error unless exactly one swap makes the program terminate
pub fn part2(program: &[Instruction]) -> Result<i64> {
    let mut patched = program.to_vec();
    let mut results = Vec::new();

    for index in 0..program.len() {
        let Some(repaired) = program.get(index).and_then(|i| i.repaired()) else {
            continue;
        };
        let Some(slot) = patched.get_mut(index) else {
            continue;
        };
        let original = std::mem::replace(slot, repaired);
        if let Exit::Terminated { accumulator } = run(&patched) {
            results.push(accumulator);
        }
        if let Some(slot) = patched.get_mut(index) {
            *slot = original;
        }
    }

    match results.as_slice() {
        [accumulator] => Ok(*accumulator),
        found => Err(invariant_error(
            "program repair",
            &format!("{} single-instruction repairs terminate, expected 1", found.len()),
        )),
    }
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or either part has no unique answer
pub fn solve(text: &str) -> Result<Answers> {
    let program = parse(text)?;
    Ok(Answers::new(part1(&program)?, part2(&program)?))
}
