use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = folio_core::DEFAULT_MAX_TITLE_LENGTH;

pub const MIN_SUBTITLE_LENGTH: usize = 1;
pub const MAX_SUBTITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_SUBTITLE_LENGTH: usize = folio_core::DEFAULT_MAX_SUBTITLE_LENGTH;

pub const MIN_DESCRIPTION_LENGTH: usize = 1;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = folio_core::DEFAULT_MAX_DESCRIPTION_LENGTH;

/// Field length limits applied by the edit form before submitting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    pub max_subtitle_length: usize,
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_subtitle_length: DEFAULT_MAX_SUBTITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_subtitle_length < MIN_SUBTITLE_LENGTH
            || self.max_subtitle_length > MAX_SUBTITLE_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_subtitle_length must be {}-{}, got {}",
                MIN_SUBTITLE_LENGTH, MAX_SUBTITLE_LENGTH, self.max_subtitle_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        Ok(())
    }
}
