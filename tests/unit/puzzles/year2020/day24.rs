//! Tests for the hexagonal lobby floor

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day24::{
        floor_after, initial_floor, parse, parse_path, part1, part2, step,
    };
    use advent::spatial::hex::HexCoord;

    const SAMPLE: &str = include_str!("../../../data/year2020/day24.txt");

    // Tests that paths ending at the start return to the reference tile
    // Verified by reading 'ne' as 'n' then 'e'
    #[test]
    fn test_paths() {
        let path = parse_path("nwwswee").expect("path parses");
        assert_eq!(path.len(), 5);
        assert_eq!(initial_floor(&[path]), [HexCoord::ORIGIN].into_iter().collect());
        assert_eq!(parse_path("esew").expect("path parses").len(), 3);
    }

    // Tests black tiles after setup and after the daily flips
    // Verified by flipping tiles with no black neighbors
    #[test]
    fn test_sample() {
        let paths = parse(SAMPLE).expect("sample parses");
        assert_eq!(part1(&paths), 10);

        let floor = initial_floor(&paths);
        assert_eq!(step(&floor).len(), 15);
        assert_eq!(floor_after(&floor, 10).len(), 37);
        assert_eq!(part2(&paths), 2208);
    }

    // Tests unknown and truncated directions
    // Verified by skipping unknown characters
    #[test]
    fn test_invalid_paths() {
        assert!(parse_path("ex").is_err());
        assert!(parse_path("en").is_err());
        assert!(parse_path("nn").is_err());
    }
}
