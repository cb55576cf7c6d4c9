//! Tests for passport validation

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day04::{FieldRules, has_required_fields, parse, part1, part2};

    const SAMPLE: &str = include_str!("../../../data/year2020/day04.txt");

    const INVALID: &str = "eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007";

    const VALID: &str = "pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719";

    // Tests the required field check with cid optional
    // Verified by requiring cid as well
    #[test]
    fn test_required_fields() {
        let passports = parse(SAMPLE).expect("sample parses");
        assert_eq!(passports.len(), 4);
        assert_eq!(part1(&passports), 2);
        assert!(passports.first().is_some_and(has_required_fields));
    }

    // Tests field rules on valid and invalid values
    // Verified by comparing heights without their unit
    #[test]
    fn test_field_rules() {
        let rules = FieldRules::new().expect("rules compile");
        for (field, value, valid) in [
            ("byr", "2002", true),
            ("byr", "2003", false),
            ("hgt", "60in", true),
            ("hgt", "190cm", true),
            ("hgt", "190in", false),
            ("hgt", "190", false),
            ("hcl", "#123abc", true),
            ("hcl", "#123abz", false),
            ("hcl", "123abc", false),
            ("ecl", "brn", true),
            ("ecl", "wat", false),
            ("pid", "000000001", true),
            ("pid", "0123456789", false),
            ("cid", "anything", true),
        ] {
            assert_eq!(rules.field_valid(field, value), valid, "{field}:{value}");
        }
    }

    // Tests whole passports against every rule
    // Verified by checking only field presence
    #[test]
    fn test_passport_rules() {
        let invalid = parse(INVALID).expect("passports parse");
        let valid = parse(VALID).expect("passports parse");
        assert_eq!(part2(&invalid).ok(), Some(0));
        assert_eq!(part2(&valid).ok(), Some(4));
    }

    // Tests tokens without a key separator
    // Verified by skipping malformed tokens
    #[test]
    fn test_invalid_token() {
        assert!(parse("byr:1990 oops").is_err());
    }
}
