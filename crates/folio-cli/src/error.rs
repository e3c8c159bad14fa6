use folio_admin::GatewayError;
use folio_config::ConfigError;
use folio_core::{CoreError, FieldErrors};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("{0}")]
    Gateway(#[from] GatewayError),

    #[error("Project {id} not found {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Could not load project {id} {location}")]
    FetchFailed { id: String, location: ErrorLocation },

    #[error("Invalid input: {errors} {location}")]
    Invalid {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        CliError::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn fetch_failed<S: Into<String>>(id: S) -> Self {
        CliError::FetchFailed {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid(errors: FieldErrors) -> Self {
        CliError::Invalid {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A submission the form session refused or the backend failed
    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        CliError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::Output {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
