//! Puzzle constants and runtime configuration defaults

// Input location
/// Directory searched for puzzle inputs when no explicit path is given
pub const DEFAULT_INPUTS_DIR: &str = "inputs";
/// Extension of puzzle input files
pub const INPUT_EXTENSION: &str = "txt";

// 2020 tunables
/// Target sum for the expense report entries
pub const EXPENSE_TARGET: i64 = 2020;
/// Length of the XMAS preamble window
pub const XMAS_PREAMBLE: usize = 25;
/// Turn whose spoken number answers the short memory game
pub const MEMORY_GAME_SHORT_TURNS: usize = 2020;
/// Turn whose spoken number answers the long memory game
pub const MEMORY_GAME_LONG_TURNS: usize = 30_000_000;
/// Number of boot cycles for the Conway cube simulation
pub const CONWAY_CYCLES: usize = 6;
/// Moves played in the short cup game
pub const CUP_GAME_SHORT_MOVES: usize = 100;
/// Moves played in the long cup game
pub const CUP_GAME_LONG_MOVES: usize = 10_000_000;
/// Total cups in the long cup game
pub const CUP_GAME_LONG_CUPS: usize = 1_000_000;
/// Days simulated on the hexagonal lobby floor
pub const HEX_FLOOR_DAYS: usize = 100;
/// Subject number used by the door and card handshake
pub const HANDSHAKE_SUBJECT: u64 = 7;
/// Modulus of the door and card handshake
pub const HANDSHAKE_MODULUS: u64 = 20_201_227;

/// Pattern searched for in the reassembled image (`#` marks a required cell)
pub const SEA_MONSTER: &str = "                  # \n#    ##    ##    ###\n #  #  #  #  #  #   ";

// 2017 tunables
/// Number of marks on the knot-hash ring
pub const KNOT_RING_SIZE: usize = 256;
/// Rounds applied by the full knot hash
pub const KNOT_HASH_ROUNDS: usize = 64;
/// Lengths appended to the ASCII input of the full knot hash
pub const KNOT_HASH_SUFFIX: [usize; 5] = [17, 31, 73, 47, 23];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Rendered image colors (RGBA)
/// Color of active cells that are not part of a found pattern
pub const ACTIVE_COLOR: [u8; 4] = [20, 60, 160, 255];
/// Color of cells covered by a found pattern
pub const HIGHLIGHT_COLOR: [u8; 4] = [40, 200, 90, 255];
/// Color of inactive cells
pub const INACTIVE_COLOR: [u8; 4] = [0, 0, 0, 0];
