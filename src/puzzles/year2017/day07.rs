//! Recursive Circus: a tower of programs stacked on discs
//!
//! Programs live in an arena addressed by index. Parsing resolves child
//! names to indices and finds the unique bottom program, so everything
//! after parsing works on plain indices.

use std::collections::HashMap;

use regex::Regex;

use crate::io::error::{Result, invalid_input, invariant_error};
use crate::io::input::{captures, group, lines, parse_number};
use crate::puzzles::answer::Answers;

/// Index of a program in the tower arena
pub type NodeId = usize;

/// One program of the tower
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Program name
    pub name: String,
    /// Weight of the program alone
    pub weight: u64,
    /// Program this one stands on, `None` for the bottom program
    pub parent: Option<NodeId>,
    /// Programs standing directly on this one
    pub children: Vec<NodeId>,
}

/// The whole tower
#[derive(Debug, Clone)]
pub struct Tower {
    programs: Vec<Program>,
    root: NodeId,
}

/// A weight change that balances the tower
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Program whose weight changes
    pub node: NodeId,
    /// Weight it must have
    pub weight: u64,
}

impl Tower {
    /// Parse `name (weight) -> child, child` lines
    ///
    /// # Errors
    ///
    /// Returns an error for malformed lines, repeated names, unknown children
    /// or anything other than exactly one bottom program
    pub fn parse(text: &str) -> Result<Self> {
        let line_pattern = Regex::new(r"^(\w+) \((\d+)\)(?: -> (.+))?$")?;

        let mut rows = Vec::new();
        let mut index: HashMap<String, NodeId> = HashMap::new();
        for line in lines(text) {
            let caps = captures(&line_pattern, line)?;
            let name = group(&caps, 1).to_string();
            let weight = parse_number(group(&caps, 2), line)?;
            let children: Vec<String> = caps
                .get(3)
                .map(|m| m.as_str().split(", ").map(str::to_string).collect())
                .unwrap_or_default();
            if index.insert(name.clone(), rows.len()).is_some() {
                return Err(invalid_input(&format!("program '{name}' is listed twice")));
            }
            rows.push((name, weight, children));
        }

        let mut programs: Vec<Program> = Vec::with_capacity(rows.len());
        let mut held = Vec::with_capacity(rows.len());
        for (name, weight, children) in rows {
            held.push(children);
            programs.push(Program {
                name,
                weight,
                parent: None,
                children: Vec::new(),
            });
        }

        for (parent, children) in held.into_iter().enumerate() {
            for child in children {
                let &id = index.get(&child).ok_or_else(|| {
                    invalid_input(&format!("a program holds unknown program '{child}'"))
                })?;
                let slot = programs
                    .get_mut(id)
                    .map(|program| &mut program.parent)
                    .ok_or_else(|| invalid_input(&format!("no program {id}")))?;
                if slot.replace(parent).is_some() {
                    return Err(invalid_input(&format!(
                        "program '{child}' stands on two programs"
                    )));
                }
                if let Some(program) = programs.get_mut(parent) {
                    program.children.push(id);
                }
            }
        }

        let roots: Vec<NodeId> = programs
            .iter()
            .enumerate()
            .filter(|(_, program)| program.parent.is_none())
            .map(|(id, _)| id)
            .collect();
        let [root] = roots.as_slice() else {
            return Err(invalid_input(&format!(
                "expected one bottom program, found {}",
                roots.len()
            )));
        };

        Ok(Self {
            programs,
            root: *root,
        })
    }

    /// Program at `id`
    pub fn program(&self, id: NodeId) -> Option<&Program> {
        self.programs.get(id)
    }

    /// Program that `id` stands on
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.program(id).and_then(|program| program.parent)
    }

    /// The bottom program
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Name of the program at `id`, or an empty string
    pub fn name(&self, id: NodeId) -> &str {
        self.program(id).map_or("", |program| program.name.as_str())
    }

    /// Weight of every program plus everything it carries
    ///
    /// # Errors
    ///
    /// Returns an error if the programs form a cycle
    pub fn tower_weights(&self) -> Result<Vec<u64>> {
        let mut totals = vec![None; self.programs.len()];
        self.fill_weight(self.root, 0, &mut totals)?;
        Ok(totals.into_iter().map(Option::unwrap_or_default).collect())
    }

    fn fill_weight(&self, id: NodeId, depth: usize, totals: &mut [Option<u64>]) -> Result<u64> {
        if depth > self.programs.len() {
            return Err(invariant_error("tower weight", &"programs form a cycle"));
        }
        if let Some(Some(total)) = totals.get(id) {
            return Ok(*total);
        }
        let program = self
            .program(id)
            .ok_or_else(|| invariant_error("tower weight", &format!("no program {id}")))?;
        let mut total = program.weight;
        for &child in &program.children {
            total += self.fill_weight(child, depth + 1, totals)?;
        }
        if let Some(slot) = totals.get_mut(id) {
            *slot = Some(total);
        }
        Ok(total)
    }

    fn children_balanced(&self, id: NodeId, totals: &[u64]) -> bool {
        self.program(id).is_none_or(|program| {
            program
                .children
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if totals.get(*a) == totals.get(*b)))
        })
    }

    /// The single weight change that balances every disc
    ///
    /// # Errors
    ///
    /// Returns an error if the tower is already balanced or cannot be
    /// balanced by exactly one change
    pub fn correction(&self) -> Result<Correction> {
        let totals = self.tower_weights()?;
        if self.children_balanced(self.root, &totals) {
            return Err(invariant_error("balancing", &"the tower is already balanced"));
        }
        self.correct(self.root, &totals)
    }

    fn correct(&self, id: NodeId, totals: &[u64]) -> Result<Correction> {
        let failure = |reason: String| invariant_error("balancing", &reason);
        let program = self
            .program(id)
            .ok_or_else(|| failure(format!("no program {id}")))?;
        let total_of = |child: NodeId| totals.get(child).copied().unwrap_or_default();

        let unbalanced: Vec<NodeId> = program
            .children
            .iter()
            .copied()
            .filter(|&child| !self.children_balanced(child, totals))
            .collect();

        match unbalanced.as_slice() {
            [] => {
                let mut counts: HashMap<u64, usize> = HashMap::new();
                for &child in &program.children {
                    *counts.entry(total_of(child)).or_insert(0) += 1;
                }
                let siblings = program.children.len().saturating_sub(1);
                let targets: Vec<u64> = counts
                    .iter()
                    .filter(|&(_, &count)| count == siblings)
                    .map(|(&weight, _)| weight)
                    .collect();
                let [target] = targets.as_slice() else {
                    return Err(failure(format!(
                        "cannot tell which program above '{}' is wrong",
                        program.name
                    )));
                };
                let odd = program
                    .children
                    .iter()
                    .copied()
                    .find(|&child| total_of(child) != *target)
                    .ok_or_else(|| failure(format!("'{}' is balanced", program.name)))?;
                let own = self.program(odd).map_or(0, |p| p.weight);
                let weight = (own + target)
                    .checked_sub(total_of(odd))
                    .filter(|&weight| weight > 0)
                    .ok_or_else(|| {
                        failure(format!("'{}' would need a non-positive weight", self.name(odd)))
                    })?;
                Ok(Correction { node: odd, weight })
            }
            [child] => {
                let correction = self.correct(*child, totals)?;
                let old = self.program(correction.node).map_or(0, |p| p.weight);
                let fixed_total = (total_of(*child) + correction.weight).saturating_sub(old);
                let agrees = program
                    .children
                    .iter()
                    .filter(|&&sibling| sibling != *child)
                    .all(|&sibling| total_of(sibling) == fixed_total);
                if agrees {
                    Ok(correction)
                } else {
                    Err(failure(format!(
                        "fixing '{}' leaves '{}' unbalanced",
                        self.name(*child),
                        program.name
                    )))
                }
            }
            _ => Err(failure(format!(
                "'{}' carries {} unbalanced programs",
                program.name,
                unbalanced.len()
            ))),
        }
    }
}

/// Parse the tower
///
/// # Errors
///
/// See [`Tower::parse`]
pub fn parse(text: &str) -> Result<Tower> {
    Tower::parse(text)
}

/// Name of the bottom program
pub fn part1(tower: &Tower) -> String {
    tower.name(tower.root()).to_string()
}

/// Weight the one wrong program should have
///
/// # Errors
///
/// Returns an error if no single correction balances the tower
pub fn part2(tower: &Tower) -> Result<u64> {
    tower.correction().map(|correction| correction.weight)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing or balancing fails
pub fn solve(text: &str) -> Result<Answers> {
    let tower = parse(text)?;
    Ok(Answers::new(part1(&tower), part2(&tower)?))
}
