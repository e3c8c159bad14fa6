use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors talking to the portfolio backend
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GatewayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GatewayError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        GatewayError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status reported by the backend, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            GatewayError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            GatewayError::Json { .. } => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GatewayError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
