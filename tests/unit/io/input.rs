//! Tests for input reading and splitting helpers

#[cfg(test)]
mod tests {
    use advent::io::error::AdventError;
    use advent::io::input::{
        blocks, captures, default_input_path, group, lines, numbers, parse_number, read_input,
    };
    use regex::Regex;
    use std::path::{Path, PathBuf};

    // Tests the default input layout
    // Verified by formatting the day without zero padding
    #[test]
    fn test_default_input_path() {
        assert_eq!(
            default_input_path(Path::new("inputs"), 2020, 7),
            PathBuf::from("inputs/year2020/day07.txt")
        );
        assert_eq!(
            default_input_path(Path::new("data"), 2017, 13),
            PathBuf::from("data/year2017/day13.txt")
        );
    }

    // Tests that reading a missing file reports the path
    // Verified by converting through the generic io error conversion
    #[test]
    fn test_read_missing_input() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.txt");
        match read_input(&path) {
            Err(AdventError::FileSystem { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a file system error, got {other:?}"),
        }

        std::fs::write(&path, "1\n2\n").expect("write input");
        assert_eq!(read_input(&path).ok().as_deref(), Some("1\n2\n"));
    }

    // Tests that blank and padded lines are cleaned up
    // Verified by trimming only the end of each line
    #[test]
    fn test_lines() {
        let collected: Vec<&str> = lines("  a \n\n b\n   \nc").collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    // Tests section splitting on runs of blank lines
    // Verified by splitting on exactly one blank line
    #[test]
    fn test_blocks() {
        let text = "\nfirst\nsecond\n\n\n  \nthird\n";
        assert_eq!(blocks(text), vec!["first\nsecond".to_string(), "third".to_string()]);
        assert!(blocks("\n\n").is_empty());
    }

    // Tests number parsing across commas, spaces and lines
    // Verified by splitting on whitespace only
    #[test]
    fn test_numbers() {
        let values: Vec<i64> = numbers("1,2, 3\n-4\t5\n").expect("numbers parse");
        assert_eq!(values, vec![1, 2, 3, -4, 5]);

        let err = numbers::<u32>("1 2\n3 x").unwrap_err();
        match err {
            AdventError::Parse { line, .. } => assert_eq!(line, "3 x"),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    // Tests single token parsing with surrounding whitespace
    // Verified by parsing the untrimmed token
    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u16>(" 42 ", "a 42 b").ok(), Some(42));
        assert!(parse_number::<u8>("300", "300").is_err());
    }

    // Tests that captures must span the whole line
    // Verified by accepting a match at any position
    #[test]
    fn test_captures_require_full_match() {
        let regex = Regex::new(r"(\d+)-(\d+)(?: (x))?").expect("valid regex");

        let caps = captures(&regex, "1-3").expect("full match");
        assert_eq!(group(&caps, 1), "1");
        assert_eq!(group(&caps, 2), "3");
        assert_eq!(group(&caps, 3), "");
        assert_eq!(group(&caps, 9), "");

        assert!(captures(&regex, "1-3 y").is_err());
        assert!(captures(&regex, "a1-3").is_err());
    }
}
