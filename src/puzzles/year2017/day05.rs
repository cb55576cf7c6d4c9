//! A Maze of Twisty Trampolines

use crate::io::error::Result;
use crate::io::input::numbers;
use crate::puzzles::answer::Answers;

/// Parse one jump offset per line
///
/// # Errors
///
/// Returns an error for a non-numeric line
pub fn parse(text: &str) -> Result<Vec<i64>> {
    numbers(text)
}

/// Follow the jumps until leaving the list; `adjust` rewrites each offset after use
pub fn steps_to_exit(offsets: &[i64], adjust: impl Fn(i64) -> i64) -> usize {
    let mut jumps = offsets.to_vec();
    let mut position: i64 = 0;
    let mut steps = 0;

    while let Some(offset) = usize::try_from(position)
        .ok()
        .and_then(|index| jumps.get_mut(index))
    {
        let jump = *offset;
        *offset = adjust(jump);
        position += jump;
        steps += 1;
    }

    steps
}

/// Every used offset grows by one
pub fn part1(offsets: &[i64]) -> usize {
    steps_to_exit(offsets, |jump| jump + 1)
}

/// Offsets of three or more shrink instead
pub fn part2(offsets: &[i64]) -> usize {
    steps_to_exit(offsets, |jump| if jump >= 3 { jump - 1 } else { jump + 1 })
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let offsets = parse(text)?;
    Ok(Answers::new(part1(&offsets), part2(&offsets)))
}
