//! # Logging
//!
//! Installs an `env_logger` backend for the `log` facade. The level comes
//! from [`LoggingConfig`] only; the environment is not consulted. Records
//! go to stderr so stdout carries nothing but results.

use crate::config::LoggingConfig;
use log::LevelFilter;
use once_cell::sync::OnceCell;

/// Configuration the logger was installed with
static LOGGING_CONFIG: OnceCell<LoggingConfig> = OnceCell::new();

/// Map a configured level name to a filter; unknown names mean INFO.
pub fn level_filter(level: &str) -> LevelFilter {
    match level.to_ascii_uppercase().as_str() {
        "TRACE" => LevelFilter::Trace,
        "DEBUG" => LevelFilter::Debug,
        "INFO" => LevelFilter::Info,
        "WARN" => LevelFilter::Warn,
        "ERROR" => LevelFilter::Error,
        "OFF" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Initialize the process logger. May only succeed once per process; the
/// configuration is recorded only once the logger is actually installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    if LOGGING_CONFIG.get().is_some() {
        return Err(LoggingError::AlreadyInitialized);
    }

    env_logger::Builder::new()
        .filter_level(level_filter(&config.level))
        .target(env_logger::Target::Stderr)
        .try_init()?;

    LOGGING_CONFIG
        .set(config.clone())
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// The configuration passed to a successful [`init`], if any
pub fn current_config() -> Option<&'static LoggingConfig> {
    LOGGING_CONFIG.get()
}

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
    #[error("Failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_map_to_filters() {
        assert_eq!(level_filter("TRACE"), LevelFilter::Trace);
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter("WARN"), LevelFilter::Warn);
        assert_eq!(level_filter("ERROR"), LevelFilter::Error);
        assert_eq!(level_filter("OFF"), LevelFilter::Off);
        assert_eq!(level_filter("verbose"), LevelFilter::Info);
    }

    #[test]
    fn second_init_is_rejected() {
        let config = LoggingConfig {
            level: "WARN".to_string(),
        };
        init(&config).unwrap();
        assert_eq!(current_config(), Some(&config));

        let err = init(&LoggingConfig::default()).unwrap_err();
        assert!(matches!(err, LoggingError::AlreadyInitialized));
    }
}
