//! Passport Processing: required fields and per-field validation

use regex::Regex;
use std::collections::HashMap;

use crate::io::error::{Result, parse_error};
use crate::io::input::{blocks, group};
use crate::puzzles::answer::Answers;

/// Field names every passport must carry (`cid` is optional)
pub const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

/// One passport as field name to raw value
pub type Passport = HashMap<String, String>;

/// Parse blank-line separated passports of `key:value` tokens
///
/// # Errors
///
/// Returns an error for a token without a `:`
pub fn parse(text: &str) -> Result<Vec<Passport>> {
    blocks(text)
        .iter()
        .map(|block| {
            block
                .split_whitespace()
                .map(|token| {
                    token
                        .split_once(':')
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .ok_or_else(|| parse_error(token, &"expected key:value"))
                })
                .collect()
        })
        .collect()
}

/// Compiled validation rules for part 2
pub struct FieldRules {
    year: Regex,
    height: Regex,
    hair: Regex,
    eye: Regex,
    passport_id: Regex,
}

impl FieldRules {
    /// Compile the rule patterns
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile
    pub fn new() -> Result<Self> {
        Ok(Self {
            year: Regex::new(r"^(\d{4})$")?,
            height: Regex::new(r"^(\d+)(cm|in)$")?,
            hair: Regex::new(r"^#[0-9a-f]{6}$")?,
            eye: Regex::new(r"^(amb|blu|brn|gry|grn|hzl|oth)$")?,
            passport_id: Regex::new(r"^\d{9}$")?,
        })
    }

    fn year_in(&self, value: &str, low: u32, high: u32) -> bool {
        self.year
            .captures(value)
            .and_then(|caps| group(&caps, 1).parse::<u32>().ok())
            .is_some_and(|year| (low..=high).contains(&year))
    }

    fn height_ok(&self, value: &str) -> bool {
        self.height.captures(value).is_some_and(|caps| {
            let amount = group(&caps, 1).parse::<u32>().ok();
            match (amount, group(&caps, 2)) {
                (Some(cm), "cm") => (150..=193).contains(&cm),
                (Some(inches), "in") => (59..=76).contains(&inches),
                _ => false,
            }
        })
    }

    /// Whether one field value passes its rule; unknown fields always pass
    pub fn field_valid(&self, field: &str, value: &str) -> bool {
        match field {
            "byr" => self.year_in(value, 1920, 2002),
            "iyr" => self.year_in(value, 2010, 2020),
            "eyr" => self.year_in(value, 2020, 2030),
            "hgt" => self.height_ok(value),
            "hcl" => self.hair.is_match(value),
            "ecl" => self.eye.is_match(value),
            "pid" => self.passport_id.is_match(value),
            _ => true,
        }
    }

    /// Whether every required field is present and valid
    pub fn passport_valid(&self, passport: &Passport) -> bool {
        REQUIRED_FIELDS.iter().all(|&field| {
            passport
                .get(field)
                .is_some_and(|value| self.field_valid(field, value))
        })
    }
}

/// Whether every required field is present
pub fn has_required_fields(passport: &Passport) -> bool {
    REQUIRED_FIELDS
        .iter()
        .all(|&field| passport.contains_key(field))
}

/// Passports with all required fields
pub fn part1(passports: &[Passport]) -> usize {
    passports
        .iter()
        .filter(|passport| has_required_fields(passport))
        .count()
}

/// Passports whose required fields are all valid
///
/// # Errors
///
/// Returns an error if the rule patterns fail to compile
pub fn part2(passports: &[Passport]) -> Result<usize> {
    let rules = FieldRules::new()?;
    Ok(passports
        .iter()
        .filter(|passport| rules.passport_valid(passport))
        .count())
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let passports = parse(text)?;
    Ok(Answers::new(part1(&passports), part2(&passports)?))
}
