//! Tests for rendered answers

#[cfg(test)]
mod tests {
    use advent::puzzles::Answers;

    // Tests rendering of mixed answer types
    // Verified by formatting answers with Debug
    #[test]
    fn test_answers_display() {
        let answers = Answers::new(42_u64, "mxmxvkd,sqjhc");
        assert_eq!(answers.part1, "42");
        assert_eq!(answers.part2, "mxmxvkd,sqjhc");
        assert_eq!(
            answers.to_string(),
            "Solution to part 1: 42\nSolution to part 2: mxmxvkd,sqjhc"
        );
    }
}
