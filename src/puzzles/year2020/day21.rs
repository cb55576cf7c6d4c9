//! Allergen Assessment: which ingredient carries which allergen

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::io::error::{Result, invariant_error};
use crate::io::input::{captures, group, lines};
use crate::puzzles::answer::Answers;

/// A food's ingredient list and the allergens it is known to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    /// Ingredient names
    pub ingredients: BTreeSet<String>,
    /// Allergens listed for this food (possibly incomplete)
    pub allergens: BTreeSet<String>,
}

/// Parse `ingredients... (contains a, b)` lines
///
/// # Errors
///
/// Returns an error for a line without an ingredient or with a malformed
/// allergen list
pub fn parse(text: &str) -> Result<Vec<Food>> {
    let pattern = Regex::new(r"^([a-z]+(?: [a-z]+)*)(?: \(contains ([a-z]+(?:, [a-z]+)*)\))?$")?;
    lines(text)
        .map(|line| {
            let caps = captures(&pattern, line)?;
            Ok(Food {
                ingredients: group(&caps, 1)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
                allergens: caps
                    .get(2)
                    .map(|list| list.as_str().split(", ").map(str::to_string).collect())
                    .unwrap_or_default(),
            })
        })
        .collect()
}

/// Allergen to the ingredients that appear in every food listing it
pub fn candidates(foods: &[Food]) -> BTreeMap<String, BTreeSet<String>> {
    let mut possible: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for food in foods {
        for allergen in &food.allergens {
            possible
                .entry(allergen.clone())
                .and_modify(|set| set.retain(|i| food.ingredients.contains(i)))
                .or_insert_with(|| food.ingredients.clone());
        }
    }
    possible
}

/// Occurrences of ingredients that cannot contain any allergen
pub fn part1(foods: &[Food]) -> usize {
    let suspects: BTreeSet<String> = candidates(foods).into_values().flatten().collect();
    foods
        .iter()
        .flat_map(|food| &food.ingredients)
        .filter(|ingredient| !suspects.contains(*ingredient))
        .count()
}

/// Allergen to the single ingredient carrying it
///
/// # Errors
///
/// Returns an error if elimination does not pin every allergen down
pub fn assign_allergens(foods: &[Food]) -> Result<BTreeMap<String, String>> {
    let mut possible = candidates(foods);
    let mut assigned = BTreeMap::new();

    while !possible.is_empty() {
        let Some((allergen, ingredient)) = possible.iter().find_map(|(allergen, set)| {
            match set.iter().collect::<Vec<_>>().as_slice() {
                [only] => Some((allergen.clone(), (*only).clone())),
                _ => None,
            }
        }) else {
            return Err(invariant_error(
                "allergen assignment",
                &format!("cannot pin down {} allergens", possible.len()),
            ));
        };

        possible.remove(&allergen);
        for set in possible.values_mut() {
            set.remove(&ingredient);
        }
        assigned.insert(allergen, ingredient);
    }

    Ok(assigned)
}

/// Dangerous ingredients sorted by their allergen, comma separated
///
/// # Errors
///
/// Returns an error if the allergens cannot all be assigned
pub fn part2(foods: &[Food]) -> Result<String> {
    Ok(assign_allergens(foods)?
        .into_values()
        .collect::<Vec<_>>()
        .join(","))
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing or allergen assignment fails
pub fn solve(text: &str) -> Result<Answers> {
    let foods = parse(text)?;
    Ok(Answers::new(part1(&foods), part2(&foods)?))
}
