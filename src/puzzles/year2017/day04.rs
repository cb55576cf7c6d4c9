//! High-Entropy Passphrases

use std::collections::HashSet;

use crate::io::error::Result;
use crate::io::input::lines;
use crate::puzzles::answer::Answers;

/// Split each line into its words
///
/// # Errors
///
/// Never fails; the signature matches the other days
pub fn parse(text: &str) -> Result<Vec<Vec<String>>> {
    Ok(lines(text)
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect())
}

fn all_distinct<T: Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}

/// No word appears twice
pub fn no_repeats(phrase: &[String]) -> bool {
    all_distinct(phrase)
}

/// No two words are anagrams of each other
pub fn no_anagrams(phrase: &[String]) -> bool {
    all_distinct(phrase.iter().map(|word| {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters
    }))
}

/// Phrases without repeated words
pub fn part1(phrases: &[Vec<String>]) -> usize {
    phrases.iter().filter(|phrase| no_repeats(phrase)).count()
}

/// Phrases without anagram pairs
pub fn part2(phrases: &[Vec<String>]) -> usize {
    phrases.iter().filter(|phrase| no_anagrams(phrase)).count()
}

/// Solve both parts
///
/// # Errors
///
/// Never fails for text input
pub fn solve(text: &str) -> Result<Answers> {
    let phrases = parse(text)?;
    Ok(Answers::new(part1(&phrases), part2(&phrases)))
}
