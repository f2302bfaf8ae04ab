//! Run configuration
//!
//! Defaults reproduce the reference run (ten elements, INFO logging). A
//! configuration can also be loaded from or saved to a TOML file when the
//! library is embedded; the binary itself only uses the defaults.

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SEQUENCE_LENGTH};
use crate::error::Result;
use crate::sequence::checked_length;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    pub sequence: SequenceConfig,
    pub logging: LoggingConfig,
}

/// Sequence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Number of elements. Kept signed so that out-of-range input can be
    /// reported rather than rejected by the parser.
    pub length: i64,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of TRACE, DEBUG, INFO, WARN, ERROR
    pub level: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SEQUENCE_LENGTH as i64,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RunConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// The validated sequence length; `InvalidArgument` when it is not a
    /// positive integer within range.
    pub fn sequence_length(&self) -> Result<usize> {
        checked_length(self.sequence.length)
    }
}

/// Configuration load/save errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
