//! Digital Plumber: connected groups of programs

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use regex::Regex;

use crate::io::error::{Result, invalid_input};
use crate::io::input::{captures, group, lines, numbers, parse_number};
use crate::puzzles::answer::Answers;

/// Program id to the programs it talks to
pub type Pipes = BTreeMap<u32, BTreeSet<u32>>;

/// Parse `id <-> id, id` lines
///
/// # Errors
///
/// Returns an error for a malformed line, a repeated id or a pipe that is
/// not listed from both ends
pub fn parse(text: &str) -> Result<Pipes> {
    let pattern = Regex::new(r"^(\d+) <-> (.+)$")?;
    let mut pipes = Pipes::new();
    for line in lines(text) {
        let caps = captures(&pattern, line)?;
        let id = parse_number(group(&caps, 1), line)?;
        let neighbors: Vec<u32> = numbers(group(&caps, 2))?;
        if pipes.insert(id, neighbors.into_iter().collect()).is_some() {
            return Err(invalid_input(&format!("program {id} is listed twice")));
        }
    }

    for (id, neighbors) in &pipes {
        for neighbor in neighbors {
            if !pipes.get(neighbor).is_some_and(|back| back.contains(id)) {
                return Err(invalid_input(&format!(
                    "pipe {id} <-> {neighbor} is not listed from both ends"
                )));
            }
        }
    }
    Ok(pipes)
}

/// Every program reachable from `start`
pub fn group_of(pipes: &Pipes, start: u32) -> BTreeSet<u32> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some(id) = queue.pop_front() {
        if seen.insert(id) {
            queue.extend(pipes.get(&id).into_iter().flatten().copied());
        }
    }
    seen
}

/// All connected groups
pub fn groups(pipes: &Pipes) -> Vec<BTreeSet<u32>> {
    let mut visited = BTreeSet::new();
    let mut found = Vec::new();
    for &id in pipes.keys() {
        if !visited.contains(&id) {
            let members = group_of(pipes, id);
            visited.extend(members.iter().copied());
            found.push(members);
        }
    }
    found
}

/// Size of the group containing program 0
///
/// # Errors
///
/// Returns an error if program 0 is not listed
pub fn part1(pipes: &Pipes) -> Result<usize> {
    if !pipes.contains_key(&0) {
        return Err(invalid_input(&"program 0 is not listed"));
    }
    Ok(group_of(pipes, 0).len())
}

/// Number of groups
pub fn part2(pipes: &Pipes) -> usize {
    groups(pipes).len()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or program 0 is missing
pub fn solve(text: &str) -> Result<Answers> {
    let pipes = parse(text)?;
    Ok(Answers::new(part1(&pipes)?, part2(&pipes)))
}
