//! Puzzle constants and runtime configuration defaults

/// Built-in puzzle: `id,west,north,east,south` with west/north male and east/south female
pub const DEFAULT_TILE_RECORDS: [&str; 9] = [
    "1,heart,spade,spade,club",
    "2,spade,spade,heart,club",
    "3,spade,diamond,spade,heart",
    "4,heart,diamond,diamond,heart",
    "5,diamond,club,club,diamond",
    "6,spade,diamond,heart,diamond",
    "7,club,heart,spade,heart",
    "8,club,heart,diamond,club",
    "9,heart,diamond,club,club",
];

/// Shape names recognised when no custom vocabulary is given
pub const STANDARD_SHAPES: [&str; 4] = ["heart", "spade", "club", "diamond"];

/// Board sides accepted by default
pub const DEFAULT_SUPPORTED_SIDES: [usize; 1] = [3];

// Bounds pathological inputs; the built-in puzzle needs a few thousand steps
/// Default maximum number of placement checks before giving up
pub const DEFAULT_STEP_BUDGET: u64 = 1_000_000;

/// Number of fields in a tile record
pub const RECORD_FIELD_COUNT: usize = 5;

/// Separator between tile record fields
pub const RECORD_SEPARATOR: char = ',';

/// Prefix marking a comment line in a record file
pub const RECORD_COMMENT_PREFIX: char = '#';

// Progress display settings
/// Solver steps between spinner refreshes
pub const PROGRESS_STEP_INTERVAL: u64 = 256;
/// Spinner tick interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 80;
