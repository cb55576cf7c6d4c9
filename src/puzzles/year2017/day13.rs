//! Packet Scanners: slipping through a firewall

use regex::Regex;

use crate::io::error::{Result, invariant_error, parse_error};
use crate::io::input::{captures, group, lines, parse_number};
use crate::math::modular::extended_gcd;
use crate::puzzles::answer::Answers;

/// A firewall layer with a scanner sweeping its range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    /// Position of the layer, which is also the picosecond the packet arrives
    pub depth: u64,
    /// Number of scanner positions
    pub range: u64,
}

impl Layer {
    /// Picoseconds for the scanner to return to the top
    pub const fn period(self) -> u64 {
        2 * self.range.saturating_sub(1)
    }

    /// Whether a packet leaving after `delay` meets the scanner at the top
    pub const fn catches(self, delay: u64) -> bool {
        let period = self.period();
        period == 0 || (delay + self.depth) % period == 0
    }

    /// Cost of being caught here
    pub const fn severity(self) -> u64 {
        self.depth * self.range
    }
}

/// Parse `depth: range` lines
///
/// # Errors
///
/// Returns an error for a malformed line or a zero range
pub fn parse(text: &str) -> Result<Vec<Layer>> {
    let pattern = Regex::new(r"^(\d+): (\d+)$")?;
    lines(text)
        .map(|line| {
            let caps = captures(&pattern, line)?;
            let layer = Layer {
                depth: parse_number(group(&caps, 1), line)?,
                range: parse_number(group(&caps, 2), line)?,
            };
            if layer.range == 0 {
                return Err(parse_error(line, &"a layer needs a range of at least 1"));
            }
            Ok(layer)
        })
        .collect()
}

/// Total severity of a trip leaving immediately
pub fn part1(layers: &[Layer]) -> u64 {
    layers
        .iter()
        .filter(|layer| layer.catches(0))
        .map(|layer| layer.severity())
        .sum()
}

/// Smallest delay that passes every layer uncaught
///
/// The catch pattern repeats with the least common multiple of the periods,
/// so the search stops there.
///
/// # Errors
///
/// Returns an error if no delay works
pub fn part2(layers: &[Layer]) -> Result<u64> {
    let unsolvable = || invariant_error("firewall delay", &"every delay is caught");
    if layers.iter().any(|layer| layer.period() == 0) {
        return Err(unsolvable());
    }
    let cycle = layers.iter().fold(1_i64, |acc, layer| {
        let period = layer.period() as i64;
        let (gcd, _, _) = extended_gcd(acc, period);
        (acc / gcd).saturating_mul(period)
    }) as u64;

    (0..cycle)
        .find(|&delay| !layers.iter().any(|layer| layer.catches(delay)))
        .ok_or_else(unsolvable)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails or no delay passes
pub fn solve(text: &str) -> Result<Answers> {
    let layers = parse(text)?;
    Ok(Answers::new(part1(&layers), part2(&layers)?))
}
