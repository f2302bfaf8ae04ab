/// Common constants used across the array_loop crate.
///
/// These defaults are used for the run configuration when explicit
/// values are not provided.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;

/// Values strictly below this are squared; everything else is doubled.
pub const SQUARE_THRESHOLD: i32 = 5;
pub const DOUBLE_OFFSET: i32 = 5;

/// Largest length whose initial values (1..=N) survive one pass of the
/// rule without overflowing `i32`.
pub const MAX_SEQUENCE_LENGTH: usize = ((i32::MAX - DOUBLE_OFFSET) / 2) as usize;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";
