//! Tests for modular arithmetic helpers

#[cfg(test)]
mod tests {
    use advent::math::modular::{
        chinese_remainder, discrete_log, extended_gcd, mod_inverse, mod_pow, rem_euclid,
    };

    // Tests square-and-multiply against known powers
    // Verified by skipping the reduction of the base
    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(4_u64, 13, 497), 445);
        assert_eq!(mod_pow(7_u64, 0, 13), 1);
        assert_eq!(mod_pow(5_u64, 3, 1), 0);
        assert_eq!(mod_pow(7_u64, 8, 20_201_227), 5_764_801);
    }

    // Tests Bezout coefficients and normalization of negative values
    // Verified by returning the last remainder without its sign fix
    #[test]
    fn test_extended_gcd_and_rem_euclid() {
        let (g, x, y) = extended_gcd(240_i64, 46);
        assert_eq!(g, 2);
        assert_eq!(240 * x + 46 * y, 2);
        assert_eq!(rem_euclid(-7_i64, 3), 2);
        assert_eq!(rem_euclid(7_i64, 3), 1);
    }

    // Tests inverses exist exactly for coprime values
    // Verified by returning the raw Bezout coefficient
    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(3_i64, 11), Some(4));
        assert_eq!(mod_inverse(-3_i64, 11), Some(7));
        assert_eq!(mod_inverse(2_i64, 4), None);
    }

    // Tests merging of coprime congruences
    // Verified by multiplying moduli without the inverse step
    #[test]
    fn test_chinese_remainder() {
        assert_eq!(chinese_remainder(&[(2, 3), (3, 5), (2, 7)]).ok(), Some((23, 105)));
        // Buses 17, x, 13, 19 departing at offsets 0, 2, 3
        assert_eq!(
            chinese_remainder(&[(0, 17), (-2, 13), (-3, 19)]).ok(),
            Some((3417, 4199))
        );
        assert_eq!(chinese_remainder(&[]).ok(), Some((0, 1)));
    }

    // Tests rejection of non-coprime and non-positive moduli
    // Verified by skipping the modulus checks
    #[test]
    fn test_chinese_remainder_errors() {
        assert!(chinese_remainder(&[(1, 4), (1, 6)]).is_err());
        assert!(chinese_remainder(&[(1, 0)]).is_err());
        assert!(chinese_remainder(&[(1, -5)]).is_err());
    }

    // Tests trial discrete logarithms on the handshake sample
    // Verified by starting the trial at exponent 1
    #[test]
    fn test_discrete_log() {
        assert_eq!(discrete_log(7, 5_764_801, 20_201_227), Some(8));
        assert_eq!(discrete_log(7, 17_807_724, 20_201_227), Some(11));
        assert_eq!(discrete_log(7, 1, 20_201_227), Some(0));
        // Powers of 2 modulo 4 never reach 3
        assert_eq!(discrete_log(2, 3, 4), None);
        assert_eq!(discrete_log(2, 1, 0), None);
    }
}
