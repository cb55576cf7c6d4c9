//! Custom Customs: questions answered "yes" per group

use std::collections::BTreeSet;

use crate::io::error::Result;
use crate::io::input::{blocks, lines};
use crate::puzzles::answer::Answers;

/// One group: each person's set of answered questions
pub type Group = Vec<BTreeSet<char>>;

/// Parse blank-line separated groups, one person per line
///
/// # Errors
///
/// Never fails; kept fallible like every other day's parser
pub fn parse(text: &str) -> Result<Vec<Group>> {
    Ok(blocks(text)
        .iter()
        .map(|block| lines(block).map(|line| line.chars().collect()).collect())
        .collect())
}

/// Questions anyone in the group answered
pub fn union(group: &Group) -> BTreeSet<char> {
    group.iter().flatten().copied().collect()
}

/// Questions everyone in the group answered
pub fn intersection(group: &Group) -> BTreeSet<char> {
    let mut people = group.iter();
    let Some(first) = people.next() else {
        return BTreeSet::new();
    };
    people.fold(first.clone(), |common, person| {
        common.intersection(person).copied().collect()
    })
}

/// Sum over groups of the questions anyone answered
pub fn part1(groups: &[Group]) -> usize {
    groups.iter().map(|group| union(group).len()).sum()
}

/// Sum over groups of the questions everyone answered
pub fn part2(groups: &[Group]) -> usize {
    groups.iter().map(|group| intersection(group).len()).sum()
}

/// Solve both parts
///
/// # Errors
///
/// Never fails for text input
pub fn solve(text: &str) -> Result<Answers> {
    let groups = parse(text)?;
    Ok(Answers::new(part1(&groups), part2(&groups)))
}
