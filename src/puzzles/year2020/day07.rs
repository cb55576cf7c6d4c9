//! Handy Haversacks: nested bag containment rules

use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::io::error::{Result, invalid_input, invariant_error};
use crate::io::input::{captures, group, lines, parse_number};
use crate::puzzles::answer::Answers;

/// The bag color both parts ask about
pub const TARGET_COLOR: &str = "shiny gold";

/// Outer color to the colors and counts it directly contains
pub type RuleSet = HashMap<String, Vec<(String, u64)>>;

/// Parse `<color> bags contain <n> <color> bag(s), ... .` lines
///
/// # Errors
///
/// Returns an error for a malformed rule, a repeated outer color, or a
/// contained color that has no rule of its own
pub fn parse(text: &str) -> Result<RuleSet> {
    let rule = Regex::new(r"^(.+?) bags contain (.+)\.$")?;
    let content = Regex::new(r"^(\d+) (.+?) bags?$")?;

    let mut rules = RuleSet::new();
    for line in lines(text) {
        let caps = captures(&rule, line)?;
        let outer = group(&caps, 1).to_string();
        let remainder = group(&caps, 2);

        let contents = if remainder == "no other bags" {
            Vec::new()
        } else {
            remainder
                .split(", ")
                .map(|part| {
                    let inner = captures(&content, part)?;
                    Ok((
                        group(&inner, 2).to_string(),
                        parse_number(group(&inner, 1), line)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?
        };

        if rules.insert(outer.clone(), contents).is_some() {
            return Err(invalid_input(&format!("two rules for {outer} bags")));
        }
    }

    if let Some(missing) = rules
        .values()
        .flatten()
        .map(|(color, _)| color)
        .find(|color| !rules.contains_key(*color))
    {
        return Err(invalid_input(&format!("no rule for {missing} bags")));
    }

    Ok(rules)
}

/// Colors from which `target` is reachable, not counting `target` itself
pub fn containers_of(rules: &RuleSet, target: &str) -> HashSet<String> {
    let mut contained_in: HashMap<&str, Vec<&str>> = HashMap::new();
    for (outer, contents) in rules {
        for (inner, _) in contents {
            contained_in.entry(inner.as_str()).or_default().push(outer.as_str());
        }
    }

    let mut found = HashSet::new();
    let mut stack = vec![target];
    while let Some(color) = stack.pop() {
        for &outer in contained_in.get(color).into_iter().flatten() {
            if found.insert(outer.to_string()) {
                stack.push(outer);
            }
        }
    }
    found.remove(target);
    found
}

fn count_inside<'a>(
    rules: &'a RuleSet,
    color: &'a str,
    memo: &mut HashMap<&'a str, u64>,
    visiting: &mut HashSet<&'a str>,
) -> Result<u64> {
    if let Some(&known) = memo.get(color) {
        return Ok(known);
    }
    if !visiting.insert(color) {
        return Err(invariant_error(
            "bag counting",
            &format!("{color} bags contain themselves"),
        ));
    }

    let mut total = 0;
    for (inner, count) in rules.get(color).into_iter().flatten() {
        total += count * (1 + count_inside(rules, inner, memo, visiting)?);
    }

    visiting.remove(color);
    memo.insert(color, total);
    Ok(total)
}

/// Total bags inside one bag of `color`
///
/// # Errors
///
/// Returns an error if the rules are cyclic
pub fn bags_inside(rules: &RuleSet, color: &str) -> Result<u64> {
    let mut memo = HashMap::new();
    let mut visiting = HashSet::new();
    let Some((key, _)) = rules.get_key_value(color) else {
        return Ok(0);
    };
    count_inside(rules, key, &mut memo, &mut visiting)
}

/// Colors that can eventually contain a shiny gold bag
pub fn part1(rules: &RuleSet) -> usize {
    containers_of(rules, TARGET_COLOR).len()
}

/// Bags required inside a shiny gold bag
///
/// # Errors
///
/// Returns an error if the rules are cyclic
pub fn part2(rules: &RuleSet) -> Result<u64> {
    bags_inside(rules, TARGET_COLOR)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or the rules are cyclic
pub fn solve(text: &str) -> Result<Answers> {
    let rules = parse(text)?;
    Ok(Answers::new(part1(&rules), part2(&rules)?))
}
