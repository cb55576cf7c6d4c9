//! Tests for ticket field deduction

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day16::{any_field, field_order, parse, part1, part2};

    const RATES: &str = "class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12";

    const ORDER: &str = include_str!("../../../data/year2020/day16.txt");

    // Tests the sum of values valid for no field
    // Verified by discarding whole tickets instead of values
    #[test]
    fn test_error_rate() {
        let notes = parse(RATES).expect("notes parse");
        assert_eq!(notes.rules.len(), 3);
        assert_eq!(notes.nearby.len(), 4);
        assert_eq!(part1(&notes), 71);
        assert!(any_field(&notes.rules).contains(11));
        assert!(any_field(&notes.rules).contains(13));
        assert!(!any_field(&notes.rules).contains(4));
        assert!(!any_field(&notes.rules).contains(12));
    }

    // Tests deducing which field sits at which position
    // Verified by keeping invalid tickets in the deduction
    #[test]
    fn test_field_order() {
        let notes = parse(ORDER).expect("notes parse");
        assert_eq!(field_order(&notes).ok(), Some(vec![1, 0, 2]));
        assert_eq!(part2(&notes).ok(), Some(11));
    }

    // Tests an undetermined order
    // Verified by assigning the first candidate of each position
    #[test]
    fn test_ambiguous_order() {
        let notes = parse("a: 0-9 or 20-29\nb: 0-9 or 30-39\n\nyour ticket:\n1,2\n\nnearby tickets:\n3,4")
            .expect("notes parse");
        assert!(field_order(&notes).is_err());
    }

    // Tests malformed notes
    // Verified by ignoring the section headers
    #[test]
    fn test_invalid_notes() {
        assert!(parse("a: 1-2 or 3-4\n\nyour ticket:\n1").is_err());
        assert!(parse("a: 1-2 or 3-4\n\ntheir ticket:\n1\n\nnearby tickets:\n1").is_err());
        assert!(parse("a: 1-2 or 3-4\n\nyour ticket:\n1,2\n\nnearby tickets:\n1").is_err());
        assert!(parse("a: 1-2\n\nyour ticket:\n1\n\nnearby tickets:\n1").is_err());
    }
}
