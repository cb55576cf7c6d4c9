//! Tests for the spreadsheet checksums

#[cfg(test)]
mod tests {
    use advent::puzzles::year2017::day02::{even_quotient, parse, part1, part2, row_range};

    // Tests the max-minus-min checksum
    // Verified by using the first and last values of each row
    #[test]
    fn test_part1_example() {
        let rows = parse("5 1 9 5\n7 5 3\n2 4 6 8").expect("rows parse");
        assert_eq!(row_range(&[5, 1, 9, 5]), 8);
        assert_eq!(part1(&rows), 18);
    }

    // Tests the evenly divisible checksum
    // Verified by dividing the smaller value by the larger
    #[test]
    fn test_part2_example() {
        let rows = parse("5\t9\t2\t8\n9\t4\t7\t3\n3\t8\t6\t5").expect("rows parse");
        assert_eq!(even_quotient(&[5, 9, 2, 8]).ok(), Some(4));
        assert_eq!(part2(&rows).ok(), Some(9));
    }

    // Tests rows without a divisible pair and malformed cells
    // Verified by returning zero for rows without a pair
    #[test]
    fn test_invalid_rows() {
        assert!(even_quotient(&[3, 5, 7]).is_err());
        assert!(parse("1 2\n3 four").is_err());
        assert_eq!(row_range(&[]), 0);
    }
}
