use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names on stderr (ignored when logging to a file)
    pub colored: bool,
    /// Log directory, relative to the config directory
    pub dir: String,
    /// Log file name inside `dir`; stderr when unset
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
        }
    }
}
