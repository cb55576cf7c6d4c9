//! Tests for the bitmask docking program

#[cfg(test)]
mod tests {
    use advent::puzzles::year2020::day14::{Instruction, Mask, parse, part1, part2};

    const VALUE_MASKS: &str = "mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X\n\
                               mem[8] = 11\n\
                               mem[7] = 101\n\
                               mem[8] = 0";

    const ADDRESS_MASKS: &str = "mask = 000000000000000000000000000000X1001X\n\
                                 mem[42] = 100\n\
                                 mask = 00000000000000000000000000000000X0XX\n\
                                 mem[26] = 1";

    // Tests masking of written values
    // Verified by applying the zero bits as ones
    #[test]
    fn test_value_masks() {
        let program = parse(VALUE_MASKS).expect("program parses");
        assert_eq!(program.len(), 4);
        assert_eq!(part1(&program), 165);
    }

    // Tests floating address decoding
    // Verified by keeping the original bit under floating positions
    #[test]
    fn test_address_masks() {
        let program = parse(ADDRESS_MASKS).expect("program parses");
        assert_eq!(part2(&program), 208);

        let Some(Instruction::SetMask(mask)) = program.first().copied() else {
            panic!("first instruction sets a mask");
        };
        let mut addresses = mask.addresses(42);
        addresses.sort_unstable();
        assert_eq!(addresses, vec![26, 27, 58, 59]);
    }

    // Tests mask parsing and a mask without floating bits
    // Verified by reading the mask from the least significant end
    #[test]
    fn test_mask_parse() {
        let text = "0".repeat(35) + "1";
        let mask = Mask::parse(&text, "mask").expect("mask parses");
        assert_eq!(mask.ones, 1);
        assert_eq!(mask.floating, 0);
        assert_eq!(mask.addresses(6), vec![7]);
        assert_eq!(mask.apply_to_value(6), 1);

        assert!(Mask::parse("X1", "mask").is_err());
        assert!(parse("mask = 2XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX").is_err());
        assert!(parse("mem[a] = 3").is_err());
    }
}
