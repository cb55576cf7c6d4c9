//! Tests for the crab cup game

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day23::{Circle, parse, part1};

    const SAMPLE: &str = "389125467";

    // Tests the labels after cup 1 after ten and a hundred moves
    // Verified by wrapping the destination to the lowest label
    #[test]
    fn test_sample_moves() {
        let cups = parse(SAMPLE).expect("sample parses");
        let mut circle = Circle::new(&cups, cups.len());
        circle.play(10);
        assert_eq!(circle.labels_after_one(), vec![9, 2, 6, 5, 8, 3, 7, 4]);
        assert_eq!(part1(&cups), "67384529");
    }

    // Tests one move that skips picked-up cups when choosing the destination
    // Verified by placing the picked-up cups after the current cup again
    #[test]
    fn test_single_move() {
        let cups = parse(SAMPLE).expect("sample parses");
        let mut circle = Circle::new(&cups, cups.len());
        circle.play_move();
        // 3 (8 9 1) 2 5 4 6 7 becomes 3 2 8 9 1 5 4 6 7
        assert_eq!(circle.after(3), 2);
        assert_eq!(circle.after(2), 8);
        assert_eq!(circle.after(1), 5);
    }

    // Tests the extended circle continues with the next labels
    // Verified by closing the ring after the given cups
    #[test]
    fn test_extended_circle() {
        let cups = parse(SAMPLE).expect("sample parses");
        let circle = Circle::new(&cups, 20);
        assert_eq!(circle.after(7), 10);
        assert_eq!(circle.after(19), 20);
        assert_eq!(circle.after(20), 3);
    }

    // Tests labels that are not a permutation of 1 to n
    // Verified by checking only the digit characters
    #[test]
    fn test_invalid_labels() {
        assert!(parse("1234").is_err());
        assert!(parse("123345").is_err());
        assert!(parse("234567").is_err());
        assert!(parse("12a45").is_err());
    }
}
