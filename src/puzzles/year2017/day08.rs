//! I Heard You Like Registers: conditional register updates

use std::collections::HashMap;

use regex::Regex;

use crate::io::error::{Result, parse_error};
use crate::io::input::{captures, group, lines, parse_number};
use crate::puzzles::answer::Answers;

/// Direction of a register update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modify {
    /// `inc`
    Increase,
    /// `dec`
    Decrease,
}

impl Modify {
    fn parse(token: &str, line: &str) -> Result<Self> {
        match token {
            "inc" => Ok(Self::Increase),
            "dec" => Ok(Self::Decrease),
            other => Err(parse_error(line, &format!("unknown update '{other}'"))),
        }
    }

    /// Apply to a register value
    pub const fn apply(self, value: i64, amount: i64) -> i64 {
        match self {
            Self::Increase => value + amount,
            Self::Decrease => value - amount,
        }
    }
}

/// Comparison in an instruction's condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
}

impl Comparison {
    fn parse(token: &str, line: &str) -> Result<Self> {
        match token {
            "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            "<" => Ok(Self::Less),
            "<=" => Ok(Self::LessOrEqual),
            ">" => Ok(Self::Greater),
            ">=" => Ok(Self::GreaterOrEqual),
            other => Err(parse_error(line, &format!("unknown comparison '{other}'"))),
        }
    }

    /// Evaluate `left <op> right`
    pub const fn holds(self, left: i64, right: i64) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Less => left < right,
            Self::LessOrEqual => left <= right,
            Self::Greater => left > right,
            Self::GreaterOrEqual => left >= right,
        }
    }
}

/// `target inc|dec amount if register <op> constant`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Register to update
    pub target: String,
    /// Update direction
    pub modify: Modify,
    /// Update amount
    pub amount: i64,
    /// Register tested by the condition
    pub register: String,
    /// Condition operator
    pub comparison: Comparison,
    /// Condition constant
    pub constant: i64,
}

/// Parse one instruction per line
///
/// # Errors
///
/// Returns an error for a malformed line or unknown operator
pub fn parse(text: &str) -> Result<Vec<Instruction>> {
    let pattern = Regex::new(r"^(\w+) (\w+) (-?\d+) if (\w+) ([=!<>]=?) (-?\d+)$")?;
    lines(text)
        .map(|line| {
            let caps = captures(&pattern, line)?;
            Ok(Instruction {
                target: group(&caps, 1).to_string(),
                modify: Modify::parse(group(&caps, 2), line)?,
                amount: parse_number(group(&caps, 3), line)?,
                register: group(&caps, 4).to_string(),
                comparison: Comparison::parse(group(&caps, 5), line)?,
                constant: parse_number(group(&caps, 6), line)?,
            })
        })
        .collect()
}

/// Final registers and the highest value any register ever held
///
/// Registers start at zero, so the highest value is at least zero.
pub fn run(program: &[Instruction]) -> (HashMap<String, i64>, i64) {
    let mut registers: HashMap<String, i64> = HashMap::new();
    let mut highest = 0;

    for instruction in program {
        let tested = registers.get(&instruction.register).copied().unwrap_or(0);
        if instruction.comparison.holds(tested, instruction.constant) {
            let value = registers.entry(instruction.target.clone()).or_insert(0);
            *value = instruction.modify.apply(*value, instruction.amount);
            highest = highest.max(*value);
        }
    }

    (registers, highest)
}

/// Largest register value after the program ends
pub fn part1(program: &[Instruction]) -> i64 {
    run(program).0.into_values().max().unwrap_or(0)
}

/// Largest value held at any point
pub fn part2(program: &[Instruction]) -> i64 {
    run(program).1
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let program = parse(text)?;
    let (registers, highest) = run(&program);
    Ok(Answers::new(
        registers.into_values().max().unwrap_or(0),
        highest,
    ))
}
