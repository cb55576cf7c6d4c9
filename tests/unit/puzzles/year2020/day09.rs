//! Tests for the XMAS cipher

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day09::{encryption_weakness, first_invalid, parse};

    const SAMPLE: &str = "35\n20\n15\n25\n47\n40\n62\n55\n65\n95\n102\n117\n150\n182\n127\n219\n299\n277\n309\n576";

    // Tests the first number that is not a sum of two of the preceding five
    // Verified by allowing a number to pair with itself
    #[test]
    fn test_first_invalid() {
        let values = parse(SAMPLE).expect("sample parses");
        assert_eq!(first_invalid(&values, 5).ok(), Some(127));
        assert!(first_invalid(&[1, 2, 3], 2).is_err());
    }

    // Tests the contiguous run summing to the invalid number
    // Verified by adding the first and last number of the run
    #[test]
    fn test_encryption_weakness() {
        let values = parse(SAMPLE).expect("sample parses");
        assert_eq!(encryption_weakness(&values, 127).ok(), Some(62));
    }

    // Tests that a single number is not a run
    // Verified by accepting runs of length one
    #[test]
    fn test_single_number_is_not_a_run() {
        assert!(encryption_weakness(&[5, 7, 1], 7).is_err());
        assert_eq!(encryption_weakness(&[5, 7, 1], 8).ok(), Some(8));
    }
}
