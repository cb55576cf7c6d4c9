//! Combo Breaker: recover the handshake encryption key

use crate::io::configuration::{HANDSHAKE_MODULUS, HANDSHAKE_SUBJECT};
use crate::io::error::{Result, invalid_input, invariant_error};
use crate::io::input::numbers;
use crate::math::modular::{discrete_log, mod_pow};
use crate::puzzles::answer::Answers;

/// Rendered answer for the day without a second puzzle
pub const NO_SECOND_PART: &str = "freebie";

/// Public keys of the card and the door
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeys {
    /// Card public key
    pub card: u64,
    /// Door public key
    pub door: u64,
}

/// Parse the two public keys
///
/// # Errors
///
/// Returns an error unless exactly two numbers are present
pub fn parse(text: &str) -> Result<PublicKeys> {
    let keys: Vec<u64> = numbers(text)?;
    let [card, door] = keys.as_slice() else {
        return Err(invalid_input(&format!(
            "expected 2 public keys, found {}",
            keys.len()
        )));
    };
    Ok(PublicKeys {
        card: *card,
        door: *door,
    })
}

/// Loop size that transforms the handshake subject into `public_key`
pub fn loop_size(public_key: u64) -> Option<u64> {
    discrete_log(HANDSHAKE_SUBJECT, public_key, HANDSHAKE_MODULUS)
}

/// Encryption key both devices agree on
///
/// # Errors
///
/// Returns an error if either key is not a power of the subject, or the two
/// derived keys disagree
pub fn part1(keys: PublicKeys) -> Result<u64> {
    let unreachable = |key: u64| {
        invariant_error(
            "loop size search",
            &format!("{key} is not a power of {HANDSHAKE_SUBJECT} modulo {HANDSHAKE_MODULUS}"),
        )
    };
    let card_loop = loop_size(keys.card).ok_or_else(|| unreachable(keys.card))?;
    let door_loop = loop_size(keys.door).ok_or_else(|| unreachable(keys.door))?;

    let from_card = mod_pow(keys.door, card_loop, HANDSHAKE_MODULUS);
    let from_door = mod_pow(keys.card, door_loop, HANDSHAKE_MODULUS);
    if from_card != from_door {
        return Err(invariant_error(
            "handshake",
            &format!("derived keys differ: {from_card} and {from_door}"),
        ));
    }
    Ok(from_card)
}

/// Solve the only part
///
/// # Errors
///
/// Returns an error if parsing or the handshake fails
pub fn solve(text: &str) -> Result<Answers> {
    let keys = parse(text)?;
    Ok(Answers::new(part1(keys)?, NO_SECOND_PART))
}
