//! Tests for arithmetic with unusual precedence

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day18::{
        Operator, Token, parse, parse_expression, part1, part2, tokenize,
    };

    // Tests both evaluation orders on the examples
    // Verified by giving multiplication precedence over addition
    #[test]
    fn test_examples() {
        for (line, left_to_right, addition_first) in [
            ("1 + 2 * 3 + 4 * 5 + 6", 71, 231),
            ("1 + (2 * 3) + (4 * (5 + 6))", 51, 51),
            ("2 * 3 + (4 * 5)", 26, 46),
            ("5 + (8 * 3 + 9 + 3 * 4 * 3)", 437, 1445),
            ("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))", 12240, 669_060),
            ("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2", 13632, 23340),
        ] {
            let expression = parse_expression(line).expect("expression parses");
            assert_eq!(expression.evaluate_left_to_right(), left_to_right, "{line}");
            assert_eq!(expression.evaluate_addition_first(), addition_first, "{line}");
        }
    }

    // Tests summing over every line
    // Verified by evaluating only the first line
    #[test]
    fn test_sums() {
        let expressions = parse("1 + 2 * 3\n2 * 3 + 4\n").expect("expressions parse");
        assert_eq!(part1(&expressions), 9 + 10);
        assert_eq!(part2(&expressions), 9 + 14);
    }

    // Tests multi-digit numbers in the tokenizer
    // Verified by emitting one token per digit
    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("(12+3)").ok(),
            Some(vec![
                Token::Open,
                Token::Number(12),
                Token::Operator(Operator::Add),
                Token::Number(3),
                Token::Close,
            ])
        );
        assert!(tokenize("1 - 2").is_err());
    }

    // Tests unbalanced and incomplete expressions
    // Verified by ignoring trailing tokens
    #[test]
    fn test_malformed_expressions() {
        assert!(parse_expression("(1 + 2").is_err());
        assert!(parse_expression("1 + 2)").is_err());
        assert!(parse_expression("1 +").is_err());
        assert!(parse_expression("1 2").is_err());
        assert!(parse_expression("* 2").is_err());
    }
}
