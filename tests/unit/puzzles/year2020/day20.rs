//! Tests for the tile jigsaw entry points

#[cfg(test)]
mod tests {
    use advent::io::error::AdventError;
    use advent::puzzles::year2020::day20::{
        census, checked_arrange, parse, part1, part2, reassemble, solve,
    };

    const SAMPLE: &str = include_str!("../../../data/year2020/day20.txt");

    // Tests both answers on the sample
    // Verified by counting every active cell as rough water
    #[test]
    fn test_sample_answers() {
        let tiles = parse(SAMPLE).expect("sample parses");
        assert_eq!(tiles.len(), 9);
        assert_eq!(part1(&tiles).ok(), Some(20_899_048_083_289));
        assert_eq!(part2(&tiles).ok(), Some(273));

        let answers = solve(SAMPLE).expect("sample solves");
        assert_eq!(answers.part1, "20899048083289");
        assert_eq!(answers.part2, "273");
    }

    // Tests that the sample borders match unambiguously
    // Verified by counting palindromic borders as shared
    #[test]
    fn test_sample_census() {
        let tiles = parse(SAMPLE).expect("sample parses");
        assert!(census(&tiles).is_unambiguous());
    }

    // Tests the reassembled image and the monster cells found in it
    // Verified by returning the image before orienting it for the scan
    #[test]
    fn test_reassemble() {
        let tiles = parse(SAMPLE).expect("sample parses");
        let (arrangement, result) = reassemble(&tiles).expect("sample reassembles");

        assert_eq!(arrangement.side(), 3);
        assert_eq!(result.image.rows(), 24);
        assert_eq!(result.covered.len(), 30);
        assert!(
            result
                .covered
                .iter()
                .all(|&(row, col)| result.image.is_active(row, col))
        );
    }

    // Tests that a tile set without a square count fails
    // Verified by truncating the grid to the largest square
    #[test]
    fn test_incomplete_input() {
        let first_two: String = SAMPLE.split("\n\n").take(2).collect::<Vec<_>>().join("\n\n");
        assert!(solve(&first_two).is_err());
        assert!(solve("").is_err());
    }

    // Tests that ambiguous borders stop the solve before placement
    // Verified by arranging without consulting the border census
    #[test]
    fn test_ambiguous_borders_are_rejected() {
        let palindrome = parse("Tile 7:\n#.#\n...\n#..").expect("tile parses");
        assert!(!census(&palindrome).is_unambiguous());
        assert!(matches!(
            checked_arrange(&palindrome),
            Err(AdventError::Invariant { .. })
        ));
        assert!(part1(&palindrome).is_err());
        assert!(solve("Tile 7:\n#.#\n...\n#..").is_err());

        let plain = parse("Tile 8:\n##..\n#..#\n...#\n#.##").expect("tile parses");
        assert_eq!(checked_arrange(&plain).ok().map(|a| a.side()), Some(1));
    }
}
