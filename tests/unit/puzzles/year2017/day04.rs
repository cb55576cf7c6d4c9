//! Tests for passphrase validation

#[cfg(test)]
mod tests {
    use advent::puzzles::year2017::day04::{no_anagrams, no_repeats, parse, part1, part2};

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    // Tests repeated word detection
    // Verified by comparing words as prefixes
    #[test]
    fn test_no_repeats() {
        assert!(no_repeats(&words("aa bb cc dd ee")));
        assert!(!no_repeats(&words("aa bb cc dd aa")));
        assert!(no_repeats(&words("aa bb cc dd aaa")));
    }

    // Tests anagram detection
    // Verified by comparing sorted words without their lengths
    #[test]
    fn test_no_anagrams() {
        assert!(no_anagrams(&words("abcde fghij")));
        assert!(!no_anagrams(&words("abcde xyz ecdab")));
        assert!(no_anagrams(&words("a ab abc abd abf abj")));
        assert!(no_anagrams(&words("iiii oiii ooii oooi oooo")));
        assert!(!no_anagrams(&words("oiii ioii iioi iiio")));
    }

    // Tests counting valid phrases over a whole input
    // Verified by counting invalid phrases
    #[test]
    fn test_counts() {
        let phrases = parse("aa bb cc dd ee\naa bb cc dd aa\naa bb cc dd aaa\n").expect("phrases parse");
        assert_eq!(part1(&phrases), 2);
        assert_eq!(part2(&phrases), 2);
    }
}
