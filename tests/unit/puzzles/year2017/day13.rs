//! Tests for the packet scanner firewall

#[cfg(test)]
mod tests {
    use advent::puzzles::year2017::day13::{Layer, parse, part1, part2};

    const SAMPLE: &str = "0: 3\n1: 2\n4: 4\n6: 4";

    // Tests trip severity and the smallest safe delay
    // Verified by checking the scanner position one picosecond late
    #[test]
    fn test_sample() {
        let layers = parse(SAMPLE).expect("sample parses");
        assert_eq!(part1(&layers), 24);
        assert_eq!(part2(&layers).ok(), Some(10));
    }

    // Tests scanner periods and catches
    // Verified by using the range as the period
    #[test]
    fn test_layer() {
        let layer = Layer { depth: 4, range: 4 };
        assert_eq!(layer.period(), 6);
        assert!(layer.catches(2));
        assert!(!layer.catches(0));
        assert_eq!(layer.severity(), 16);
    }

    // Tests a range-one layer, which catches every packet
    // Verified by searching delays until overflow
    #[test]
    fn test_unpassable_firewall() {
        let layers = parse("0: 1\n3: 2").expect("layers parse");
        assert!(part2(&layers).is_err());
        assert!(parse("2: 0").is_err());
    }

    // Tests that no layers means no delay is needed
    // Verified by starting the search at one
    #[test]
    fn test_empty_firewall() {
        assert_eq!(part2(&[]).ok(), Some(0));
        assert_eq!(part1(&[]), 0);
    }
}
