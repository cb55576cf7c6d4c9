//! Tests for the digit captcha

#[cfg(test)]
mod tests {
    use advent::puzzles::year2017::day01::{matching_sum, parse, part1, part2, solve};

    fn digits(text: &str) -> Vec<u32> {
        parse(text).expect("digits parse")
    }

    // Tests sums of digits matching their successor, wrapping around
    // Verified by comparing without wrapping past the end
    #[test]
    fn test_part1_examples() {
        assert_eq!(part1(&digits("1122")), 3);
        assert_eq!(part1(&digits("1111")), 4);
        assert_eq!(part1(&digits("1234")), 0);
        assert_eq!(part1(&digits("91212129")), 9);
    }

    // Tests sums of digits matching the one halfway around
    // Verified by using an offset of one
    #[test]
    fn test_part2_examples() {
        for (text, expected) in [("1212", 6), ("1221", 0), ("123425", 4), ("123123", 12), ("12131415", 4)] {
            assert_eq!(part2(&digits(text)).ok(), Some(expected), "{text}");
        }
    }

    // Tests rejection of odd lengths, empty input and non-digits
    // Verified by rounding the halfway offset down
    #[test]
    fn test_invalid_inputs() {
        assert!(part2(&digits("123")).is_err());
        assert!(parse("  \n").is_err());
        assert!(parse("12a4").is_err());
        assert!(solve("121").is_err());
        assert_eq!(matching_sum(&[], 1), 0);
    }
}
