//! Modular arithmetic helpers
//!
//! Generic over the `num-traits` integer traits so the same code serves the
//! `u64` handshake arithmetic and the `i128` remainder theorem.

use num_traits::{PrimInt, Signed};

use crate::io::error::{Result, invariant_error};

/// `base^exponent mod modulus` by square-and-multiply
///
/// `modulus * modulus` must fit in `T`.
pub fn mod_pow<T: PrimInt>(base: T, exponent: T, modulus: T) -> T {
    if modulus == T::one() {
        return T::zero();
    }

    let mut result = T::one();
    let mut square = base % modulus;
    let mut remaining = exponent;
    while remaining > T::zero() {
        if remaining & T::one() == T::one() {
            result = result * square % modulus;
        }
        square = square * square % modulus;
        remaining = remaining >> 1;
    }
    result
}

/// Extended Euclid: `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`
pub fn extended_gcd<T: PrimInt + Signed>(a: T, b: T) -> (T, T, T) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (T::one(), T::zero());
    let (mut old_t, mut t) = (T::zero(), T::one());

    while r != T::zero() {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);
    }

    if old_r < T::zero() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Normalize `value` into `0..modulus`
pub fn rem_euclid<T: PrimInt + Signed>(value: T, modulus: T) -> T {
    let r = value % modulus;
    if r < T::zero() { r + modulus.abs() } else { r }
}

/// Multiplicative inverse of `a` modulo `modulus`, if one exists
pub fn mod_inverse<T: PrimInt + Signed>(a: T, modulus: T) -> Option<T> {
    let (g, x, _) = extended_gcd(rem_euclid(a, modulus), modulus);
    (g == T::one()).then(|| rem_euclid(x, modulus))
}

/// Merge congruences `x ≡ residue (mod modulus)` into one
///
/// Returns `(residue, modulus)` of the combined congruence with the residue
/// in `0..modulus`. An empty list yields `(0, 1)`.
///
/// # Errors
///
/// Returns an error if a modulus is not positive, the moduli are not
/// pairwise coprime, or the combined modulus overflows `i128`
pub fn chinese_remainder(congruences: &[(i128, i128)]) -> Result<(i128, i128)> {
    let mut residue: i128 = 0;
    let mut modulus: i128 = 1;

    for &(r, m) in congruences {
        if m <= 0 {
            return Err(invariant_error(
                "chinese remainder",
                &format!("modulus {m} is not positive"),
            ));
        }
        let inverse = mod_inverse(modulus, m).ok_or_else(|| {
            invariant_error(
                "chinese remainder",
                &format!("modulus {m} shares a factor with {modulus}"),
            )
        })?;
        // Choose k so that residue + modulus * k ≡ r (mod m)
        let k = rem_euclid((r - residue) % m * inverse, m);
        let combined = modulus.checked_mul(m).ok_or_else(|| {
            invariant_error("chinese remainder", &"combined modulus overflows i128")
        })?;
        residue = rem_euclid(residue + modulus * k, combined);
        modulus = combined;
    }

    Ok((residue, modulus))
}

/// Smallest `e` with `base^e ≡ target (mod modulus)`, by trial
pub fn discrete_log(base: u64, target: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }
    let target = target % modulus;
    let mut value = 1 % modulus;
    for exponent in 0..modulus {
        if value == target {
            return Some(exponent);
        }
        value = value * base % modulus;
    }
    None
}
