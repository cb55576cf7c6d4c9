//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use advent::io::configuration::{
        CUP_GAME_LONG_CUPS, CUP_GAME_LONG_MOVES, HANDSHAKE_MODULUS, KNOT_HASH_SUFFIX,
        KNOT_RING_SIZE, MEMORY_GAME_LONG_TURNS, MEMORY_GAME_SHORT_TURNS, SEA_MONSTER,
    };

    // Tests that the sea monster text keeps its leading spaces
    // Verified by trimming the pattern literal
    #[test]
    fn test_sea_monster_rows() {
        let rows: Vec<&str> = SEA_MONSTER.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 20));
        assert_eq!(SEA_MONSTER.matches('#').count(), 15);
    }

    // Tests the relations between puzzle tunables
    // Verified by swapping the short and long settings
    #[test]
    fn test_tunables() {
        assert!(MEMORY_GAME_SHORT_TURNS < MEMORY_GAME_LONG_TURNS);
        assert!(CUP_GAME_LONG_CUPS < CUP_GAME_LONG_MOVES);
        assert_eq!(HANDSHAKE_MODULUS, 20_201_227);
        assert_eq!(KNOT_RING_SIZE, 256);
        assert_eq!(KNOT_HASH_SUFFIX, [17, 31, 73, 47, 23]);
    }
}
