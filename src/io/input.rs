//! Reading puzzle input files and splitting them into lines and sections

use crate::io::configuration::INPUT_EXTENSION;
use crate::io::error::{AdventError, Result, parse_error};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Read a whole input file into memory
///
/// # Errors
///
/// Returns a [`AdventError::FileSystem`] error if the file cannot be read
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| AdventError::FileSystem {
        path: path.to_path_buf(),
        operation: "read input",
        source: e,
    })
}

/// Default input location for a puzzle: `<inputs>/year<YYYY>/day<DD>.txt`
pub fn default_input_path(inputs_dir: &Path, year: u16, day: u8) -> PathBuf {
    inputs_dir
        .join(format!("year{year}"))
        .join(format!("day{day:02}.{INPUT_EXTENSION}"))
}

/// Non-empty lines with surrounding whitespace removed
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Sections separated by one or more blank lines
///
/// Each section keeps its own line breaks but loses surrounding whitespace.
pub fn blocks(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current.join("\n"));
    }

    sections
}

/// Parse a single token, reporting the enclosing line on failure
///
/// # Errors
///
/// Returns a [`AdventError::Parse`] error naming `line` if `token` is not a valid `T`
pub fn parse_number<T>(token: &str, line: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    token
        .trim()
        .parse()
        .map_err(|e| parse_error(line, &format!("'{token}' is not a number ({e})")))
}

/// Parse every whitespace or comma separated token on every line
///
/// # Errors
///
/// Returns a [`AdventError::Parse`] error for the first token that is not a valid `T`
pub fn numbers<T>(text: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let mut values = Vec::new();
    for line in lines(text) {
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            values.push(parse_number(token, line)?);
        }
    }
    Ok(values)
}

/// Match `regex` against the whole of `line`
///
/// # Errors
///
/// Returns a [`AdventError::Parse`] error if the line does not match
pub fn captures<'a>(regex: &Regex, line: &'a str) -> Result<Captures<'a>> {
    regex
        .captures(line)
        .filter(|caps| caps.get(0).is_some_and(|m| m.as_str().len() == line.len()))
        .ok_or_else(|| parse_error(line, &format!("expected format {}", regex.as_str())))
}

/// Text of capture group `index`, or an empty string when it did not participate
pub fn group<'a>(caps: &Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}
