mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use validation_config::ValidationConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";
/// Config directory used when `FOLIO_CONFIG_DIR` is unset, relative to cwd
pub const DEFAULT_CONFIG_DIR: &str = ".folio";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
