//! Stream Processing: nested groups and cancelled garbage

use crate::io::error::{Result, parse_error};
use crate::puzzles::answer::Answers;

/// Totals gathered from one pass over a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamStats {
    /// Sum of group depths, outermost group scoring 1
    pub score: u64,
    /// Garbage characters that were neither cancelled nor delimiters
    pub garbage: u64,
}

/// Scan a stream of `{}` groups and `<>` garbage, where `!` cancels the
/// next character inside garbage
///
/// # Errors
///
/// Returns an error for unbalanced braces, unterminated garbage or a
/// stray character outside garbage
pub fn scan(stream: &str) -> Result<StreamStats> {
    let mut stats = StreamStats::default();
    let mut depth: u64 = 0;
    let mut in_garbage = false;
    let mut chars = stream.chars();

    while let Some(c) = chars.next() {
        if in_garbage {
            match c {
                '!' => {
                    chars.next();
                }
                '>' => in_garbage = false,
                _ => stats.garbage += 1,
            }
            continue;
        }
        match c {
            '{' => {
                depth += 1;
                stats.score += depth;
            }
            '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| parse_error(stream, &"'}' closes no group"))?;
            }
            '<' => in_garbage = true,
            ',' => {}
            other => {
                return Err(parse_error(
                    stream,
                    &format!("unexpected '{other}' outside garbage"),
                ));
            }
        }
    }

    if in_garbage {
        return Err(parse_error(stream, &"garbage is never closed"));
    }
    if depth > 0 {
        return Err(parse_error(stream, &format!("{depth} groups are never closed")));
    }
    Ok(stats)
}

/// Scan the trimmed input
///
/// # Errors
///
/// See [`scan`]
pub fn parse(text: &str) -> Result<StreamStats> {
    scan(text.trim())
}

/// Total group score
pub const fn part1(stats: StreamStats) -> u64 {
    stats.score
}

/// Non-cancelled garbage characters
pub const fn part2(stats: StreamStats) -> u64 {
    stats.garbage
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if the stream is malformed
pub fn solve(text: &str) -> Result<Answers> {
    let stats = parse(text)?;
    Ok(Answers::new(part1(stats), part2(stats)))
}
