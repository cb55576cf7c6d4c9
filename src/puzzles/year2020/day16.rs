//! Ticket Translation: validating tickets and deducing field positions

use regex::Regex;
use std::collections::BTreeSet;

use crate::io::error::{Result, invalid_input, invariant_error, parse_error};
use crate::io::input::{blocks, captures, group, lines, parse_number};
use crate::math::ranges::DisjointRangeSet;
use crate::puzzles::answer::Answers;

/// A named field and the values it accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// Field name
    pub name: String,
    /// Accepted values
    pub valid: DisjointRangeSet<u64>,
}

/// Rules, our ticket and the nearby tickets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes {
    /// Field rules in input order
    pub rules: Vec<FieldRule>,
    /// Values on our ticket
    pub ticket: Vec<u64>,
    /// Values on every nearby ticket
    pub nearby: Vec<Vec<u64>>,
}

fn parse_ticket(line: &str) -> Result<Vec<u64>> {
    line.split(',')
        .map(|value| parse_number(value, line))
        .collect()
}

/// Parse the three blank-line separated sections
///
/// # Errors
///
/// Returns an error for a wrong section count, a malformed rule or ticket,
/// or tickets whose length differs from the number of rules
pub fn parse(text: &str) -> Result<Notes> {
    let sections = blocks(text);
    let [rules_text, ours_text, nearby_text] = sections.as_slice() else {
        return Err(invalid_input(&format!(
            "expected 3 sections, found {}",
            sections.len()
        )));
    };

    let rule = Regex::new(r"^([^:]+): (\d+)-(\d+) or (\d+)-(\d+)$")?;
    let rules = lines(rules_text)
        .map(|line| {
            let caps = captures(&rule, line)?;
            let bound = |index| parse_number::<u64>(group(&caps, index), line);
            Ok(FieldRule {
                name: group(&caps, 1).to_string(),
                valid: DisjointRangeSet::from_ranges([(bound(2)?, bound(3)?), (bound(4)?, bound(5)?)]),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut ours = lines(ours_text);
    if ours.next() != Some("your ticket:") {
        return Err(invalid_input(&"second section must start with 'your ticket:'"));
    }
    let ticket = ours
        .next()
        .map(parse_ticket)
        .transpose()?
        .ok_or_else(|| invalid_input(&"missing our ticket"))?;

    let mut theirs = lines(nearby_text);
    if theirs.next() != Some("nearby tickets:") {
        return Err(invalid_input(&"third section must start with 'nearby tickets:'"));
    }
    let nearby = theirs.map(parse_ticket).collect::<Result<Vec<_>>>()?;

    for values in std::iter::once(&ticket).chain(nearby.iter()) {
        if values.len() != rules.len() {
            return Err(parse_error(
                &values.iter().map(u64::to_string).collect::<Vec<_>>().join(","),
                &format!("ticket has {} values for {} fields", values.len(), rules.len()),
            ));
        }
    }

    Ok(Notes {
        rules,
        ticket,
        nearby,
    })
}

/// Values accepted by at least one field
pub fn any_field(rules: &[FieldRule]) -> DisjointRangeSet<u64> {
    rules
        .iter()
        .flat_map(|rule| rule.valid.ranges().iter().copied())
        .collect()
}

/// Sum of nearby ticket values that no field accepts
pub fn part1(notes: &Notes) -> u64 {
    let valid = any_field(&notes.rules);
    notes
        .nearby
        .iter()
        .flatten()
        .filter(|&&value| !valid.contains(value))
        .sum()
}

/// Rule index for every ticket position, deduced from the valid nearby tickets
///
/// Positions with a single remaining candidate fix that field, which is then
/// removed from every other position, until all positions are fixed.
///
/// # Errors
///
/// Returns an error if some position has no candidate or the tickets do not
/// determine a unique assignment
pub fn field_order(notes: &Notes) -> Result<Vec<usize>> {
    let valid = any_field(&notes.rules);
    let tickets: Vec<&Vec<u64>> = notes
        .nearby
        .iter()
        .filter(|ticket| ticket.iter().all(|&value| valid.contains(value)))
        .collect();

    let mut candidates: Vec<BTreeSet<usize>> = (0..notes.rules.len())
        .map(|position| {
            notes
                .rules
                .iter()
                .enumerate()
                .filter(|(_, rule)| {
                    tickets
                        .iter()
                        .all(|ticket| ticket.get(position).is_some_and(|&v| rule.valid.contains(v)))
                })
                .map(|(index, _)| index)
                .collect()
        })
        .collect();

    let mut order: Vec<Option<usize>> = vec![None; candidates.len()];
    while order.iter().any(Option::is_none) {
        let Some((position, field)) = candidates
            .iter()
            .enumerate()
            .find_map(|(position, fields)| match fields.iter().collect::<Vec<_>>().as_slice() {
                [only] => Some((position, **only)),
                _ => None,
            })
        else {
            return Err(invariant_error(
                "field deduction",
                &"tickets do not determine a unique field order",
            ));
        };

        if let Some(slot) = order.get_mut(position) {
            *slot = Some(field);
        }
        for fields in &mut candidates {
            fields.remove(&field);
        }
    }

    Ok(order.into_iter().flatten().collect())
}

/// Product of the values of our ticket's `departure` fields
///
/// # Errors
///
/// Returns an error if the field order cannot be deduced
pub fn part2(notes: &Notes) -> Result<u64> {
    let order = field_order(notes)?;
    Ok(order
        .iter()
        .zip(notes.ticket.iter())
        .filter(|&(&field, _)| {
            notes
                .rules
                .get(field)
                .is_some_and(|rule| rule.name.starts_with("departure"))
        })
        .map(|(_, &value)| value)
        .product())
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing or field deduction fails
pub fn solve(text: &str) -> Result<Answers> {
    let notes = parse(text)?;
    Ok(Answers::new(part1(&notes), part2(&notes)?))
}
