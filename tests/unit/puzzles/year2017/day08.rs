//! Tests for conditional register updates

#[cfg(test)]
mod tests {
    use advent::puzzles::year2017::day08::{Comparison, Modify, parse, part1, part2, run};

    const SAMPLE: &str = "b inc 5 if a > 1\n\
                          a inc 1 if b < 5\n\
                          c dec -10 if a >= 1\n\
                          c inc -20 if c == 10";

    // Tests final and highest register values on the sample
    // Verified by starting the highest value at the first update
    #[test]
    fn test_sample() {
        let program = parse(SAMPLE).expect("sample parses");
        assert_eq!(program.len(), 4);
        assert_eq!(program.first().map(|i| i.comparison), Some(Comparison::Greater));
        assert_eq!(program.get(2).map(|i| i.modify), Some(Modify::Decrease));

        let (registers, highest) = run(&program);
        assert_eq!(registers.get("a"), Some(&1));
        assert_eq!(registers.get("c"), Some(&-10));
        assert_eq!(registers.get("b"), None);
        assert_eq!(highest, 10);
        assert_eq!(part1(&program), 1);
        assert_eq!(part2(&program), 10);
    }

    // Tests every comparison operator
    // Verified by swapping the strict and non-strict operators
    #[test]
    fn test_comparisons() {
        assert!(Comparison::Equal.holds(2, 2));
        assert!(Comparison::NotEqual.holds(1, 2));
        assert!(Comparison::Less.holds(1, 2));
        assert!(!Comparison::Less.holds(2, 2));
        assert!(Comparison::LessOrEqual.holds(2, 2));
        assert!(Comparison::Greater.holds(3, 2));
        assert!(!Comparison::Greater.holds(2, 2));
        assert!(Comparison::GreaterOrEqual.holds(2, 2));
        assert_eq!(Modify::Decrease.apply(3, -2), 5);
    }

    // Tests rejection of unknown operators
    // Verified by treating unknown updates as increments
    #[test]
    fn test_invalid_lines() {
        assert!(parse("a mul 2 if b == 0").is_err());
        assert!(parse("a inc 2 if b = 0").is_err());
        assert!(parse("a inc 2 if b <> 0").is_err());
        assert!(parse("a inc two if b == 0").is_err());
    }

    // Tests that an all-negative run still reports zero as the highest value
    // Verified by starting the highest value at the minimum integer
    #[test]
    fn test_negative_registers() {
        let program = parse("a dec 4 if b == 0\nb dec 1 if a < 0").expect("program parses");
        assert_eq!(part1(&program), -1);
        assert_eq!(part2(&program), 0);
    }
}
