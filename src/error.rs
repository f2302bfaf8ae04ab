use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Unified error type for the array_loop crate.
///
/// Every failure is unrecoverable for the run: callers report it and stop.
#[derive(Debug, thiserror::Error)]
pub enum ArrayLoopError {
    /// A length that is not a positive integer within range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index or length reaching past the allocated storage
    #[error("Out of bounds: requested {requested}, capacity {capacity}")]
    OutOfBounds { requested: usize, capacity: usize },

    /// The transform rule does not fit in an i32 for this element
    #[error("Arithmetic overflow transforming value {value} at index {index}")]
    Overflow { index: usize, value: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

pub type Result<T> = std::result::Result<T, ArrayLoopError>;
