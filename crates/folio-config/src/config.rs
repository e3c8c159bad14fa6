use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FOLIO_CONFIG_DIR env var, else use ./.folio/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FOLIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.validation.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a bare file name, got {:?}",
                file
            )));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(file)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!(
            "  validation: title={}, subtitle={}, desc={}",
            self.validation.max_title_length,
            self.validation.max_subtitle_length,
            self.validation.max_description_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("FOLIO_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("FOLIO_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Logging
        Self::apply_env_parse("FOLIO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FOLIO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FOLIO_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_SUBTITLE_LENGTH",
            &mut self.validation.max_subtitle_length,
        );
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring {}: cannot parse {:?}", var_name, val),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
