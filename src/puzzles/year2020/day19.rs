//! Monster Messages: matching messages against a context-free grammar
//!
//! Rules are converted to Chomsky normal form (long alternatives split
//! through fresh symbols, unit rules folded into their targets) and every
//! message is checked with the CYK algorithm. The CNF conversion handles
//! recursive rules, so the looping rules of part 2 need no special casing.

use bitvec::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use crate::io::error::{Result, invalid_input, parse_error};
use crate::io::input::{blocks, lines, parse_number};
use crate::puzzles::answer::Answers;

/// Rule number
pub type Symbol = usize;

/// Start symbol every message must derive from
pub const START: Symbol = 0;

/// One element of a rule alternative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Another rule
    Rule(Symbol),
    /// A literal character
    Literal(char),
}

/// Rule number to its alternatives
pub type Rules = BTreeMap<Symbol, Vec<Vec<Term>>>;

/// Rules and the messages to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Grammar rules
    pub rules: Rules,
    /// Received messages
    pub messages: Vec<String>,
}

fn parse_term(token: &str, line: &str) -> Result<Term> {
    if let Some(quoted) = token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        let mut chars = quoted.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Term::Literal(c)),
            _ => Err(parse_error(line, &"literal must be a single character")),
        }
    } else {
        Ok(Term::Rule(parse_number(token, line)?))
    }
}

/// Parse `n: a b | c d` and `n: "x"` rules, then the messages
///
/// # Errors
///
/// Returns an error for a malformed rule, a repeated rule number or a
/// missing section
pub fn parse(text: &str) -> Result<Input> {
    let sections = blocks(text);
    let [rules_text, messages_text] = sections.as_slice() else {
        return Err(invalid_input(&"expected a rule section and a message section"));
    };

    let mut rules = Rules::new();
    for line in lines(rules_text) {
        let (number, body) = line
            .split_once(": ")
            .ok_or_else(|| parse_error(line, &"expected '<n>: <alternatives>'"))?;
        let alternatives = body
            .split(" | ")
            .map(|alternative| {
                alternative
                    .split_whitespace()
                    .map(|token| parse_term(token, line))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        if alternatives.iter().any(Vec::is_empty) {
            return Err(parse_error(line, &"empty alternative"));
        }
        if rules
            .insert(parse_number(number, line)?, alternatives)
            .is_some()
        {
            return Err(parse_error(line, &"rule defined twice"));
        }
    }

    Ok(Input {
        rules,
        messages: lines(messages_text).map(str::to_string).collect(),
    })
}

/// Grammar in Chomsky normal form over dense symbol numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    symbol_count: usize,
    terminals: BTreeSet<(Symbol, char)>,
    pairs: BTreeSet<(Symbol, Symbol, Symbol)>,
}

impl Grammar {
    /// Convert rules to Chomsky normal form
    ///
    /// # Errors
    ///
    /// Returns an error if the start rule is missing or a rule refers to an
    /// undefined rule
    pub fn from_rules(rules: &Rules) -> Result<Self> {
        if !rules.contains_key(&START) {
            return Err(invalid_input(&"grammar has no rule 0"));
        }
        if let Some(missing) = rules
            .values()
            .flatten()
            .flatten()
            .find_map(|term| match term {
                Term::Rule(symbol) if !rules.contains_key(symbol) => Some(*symbol),
                _ => None,
            })
        {
            return Err(invalid_input(&format!("rule {missing} is referenced but not defined")));
        }

        // Split alternatives longer than two terms through fresh symbols
        let mut next_fresh = rules.keys().max().map_or(0, |max| max + 1);
        let mut binary: BTreeMap<Symbol, Vec<Vec<Term>>> = BTreeMap::new();
        for (&symbol, alternatives) in rules {
            for alternative in alternatives {
                let mut terms = alternative.clone();
                while terms.len() > 2 {
                    let fresh = next_fresh;
                    next_fresh += 1;
                    let tail = terms.split_off(terms.len() - 2);
                    binary.entry(fresh).or_default().push(tail);
                    terms.push(Term::Rule(fresh));
                }
                binary.entry(symbol).or_default().push(terms);
            }
        }

        // Fold unit rules: every symbol inherits the productions of all
        // symbols it reaches through chains of single-rule alternatives
        let mut terminals = BTreeSet::new();
        let mut pairs = BTreeSet::new();
        for &symbol in binary.keys() {
            let mut closure = BTreeSet::from([symbol]);
            let mut stack = vec![symbol];
            while let Some(current) = stack.pop() {
                for alternative in binary.get(&current).into_iter().flatten() {
                    if let [Term::Rule(target)] = alternative.as_slice()
                        && closure.insert(*target)
                    {
                        stack.push(*target);
                    }
                }
            }

            for reached in &closure {
                for alternative in binary.get(reached).into_iter().flatten() {
                    match alternative.as_slice() {
                        [Term::Literal(c)] => {
                            terminals.insert((symbol, *c));
                        }
                        [Term::Rule(left), Term::Rule(right)] => {
                            pairs.insert((symbol, *left, *right));
                        }
                        [Term::Rule(_)] => {}
                        _ => {
                            return Err(invalid_input(&format!(
                                "rule {reached} mixes literals with other terms"
                            )));
                        }
                    }
                }
            }
        }

        Ok(Self {
            symbol_count: next_fresh,
            terminals,
            pairs,
        })
    }

    /// Whether `message` derives from the start symbol (CYK)
    pub fn matches(&self, message: &str) -> bool {
        let chars: Vec<char> = message.chars().collect();
        let n = chars.len();
        if n == 0 {
            return false;
        }

        // table[(length - 1) * n + start] holds the symbols deriving that substring
        let mut table = vec![bitvec![0; self.symbol_count]; n * n];
        let cell = |length: usize, start: usize| (length - 1) * n + start;

        for (start, &c) in chars.iter().enumerate() {
            if let Some(bits) = table.get_mut(cell(1, start)) {
                for &(symbol, _) in self.terminals.iter().filter(|&&(_, t)| t == c) {
                    bits.set(symbol, true);
                }
            }
        }

        for length in 2..=n {
            for start in 0..=n - length {
                let mut derived = bitvec![0; self.symbol_count];
                for split in 1..length {
                    let (Some(left), Some(right)) = (
                        table.get(cell(split, start)),
                        table.get(cell(length - split, start + split)),
                    ) else {
                        continue;
                    };
                    for &(symbol, a, b) in &self.pairs {
                        let holds = |bits: &BitVec, s: Symbol| bits.get(s).is_some_and(|bit| *bit);
                        if holds(left, a) && holds(right, b) {
                            derived.set(symbol, true);
                        }
                    }
                }
                if let Some(slot) = table.get_mut(cell(length, start)) {
                    *slot = derived;
                }
            }
        }

        table
            .get(cell(n, 0))
            .and_then(|bits| bits.get(START).map(|bit| *bit))
            .unwrap_or(false)
    }
}

/// Messages matching the grammar
///
/// # Errors
///
/// Returns an error if the rules cannot be converted
pub fn count_matching(rules: &Rules, messages: &[String]) -> Result<usize> {
    let grammar = Grammar::from_rules(rules)?;
    Ok(messages
        .iter()
        .filter(|message| grammar.matches(message))
        .count())
}

/// Replace rules 8 and 11 with their looping versions
pub fn with_loops(rules: &Rules) -> Rules {
    let mut looped = rules.clone();
    looped.insert(
        8,
        vec![
            vec![Term::Rule(42)],
            vec![Term::Rule(42), Term::Rule(8)],
        ],
    );
    looped.insert(
        11,
        vec![
            vec![Term::Rule(42), Term::Rule(31)],
            vec![Term::Rule(42), Term::Rule(11), Term::Rule(31)],
        ],
    );
    looped
}

/// Messages matching the rules as given
///
/// # Errors
///
/// Returns an error if the rules cannot be converted
pub fn part1(input: &Input) -> Result<usize> {
    count_matching(&input.rules, &input.messages)
}

/// Messages matching the rules with loops in 8 and 11
///
/// # Errors
///
/// Returns an error if the rules cannot be converted
pub fn part2(input: &Input) -> Result<usize> {
    count_matching(&with_loops(&input.rules), &input.messages)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing or grammar conversion fails
pub fn solve(text: &str) -> Result<Answers> {
    let input = parse(text)?;
    Ok(Answers::new(part1(&input)?, part2(&input)?))
}
