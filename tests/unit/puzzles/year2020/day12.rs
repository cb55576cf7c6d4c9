//! Tests for ferry navigation

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day12::{Action, Vector, parse, part1, part2};

    const SAMPLE: &str = "F10\nN3\nF7\nR90\nF11";

    // Tests both navigation rules on the sample
    // Verified by moving the ship on direction actions in waypoint mode
    #[test]
    fn test_sample() {
        let actions = parse(SAMPLE).expect("sample parses");
        assert_eq!(actions.get(3), Some(&Action::Right(1)));
        assert_eq!(part1(&actions), 25);
        assert_eq!(part2(&actions), 286);
    }

    // Tests vector rotation in both directions
    // Verified by rotating left for right turns
    #[test]
    fn test_rotation() {
        let waypoint = Vector::new(4, 10);
        assert_eq!(waypoint.rotate_right(1), Vector::new(-10, 4));
        assert_eq!(waypoint.rotate_left(1), Vector::new(10, -4));
        assert_eq!(waypoint.rotate_left(2), waypoint.rotate_right(2));
        assert_eq!(waypoint.rotate_right(4), waypoint);
        assert_eq!(Vector::new(-3, 5).manhattan(), 8);
    }

    // Tests unknown actions and turns off the right angles
    // Verified by rounding turns to the nearest quarter
    #[test]
    fn test_invalid_actions() {
        assert!(parse("X5").is_err());
        assert!(parse("R45").is_err());
        assert!(parse("L360").is_err());
        assert!(parse("Fx").is_err());
    }
}
