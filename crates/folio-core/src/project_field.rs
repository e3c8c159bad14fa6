use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Editable fields of a project form.
///
/// Variant order is the order fields are declared on the form, which is also
/// the order validation messages are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectField {
    Title,
    Subtitle,
    Description,
    GithubUrl,
    LiveUrl,
    Date,
    Image,
}

impl ProjectField {
    /// Scalar fields sent as text parts on every create/update request
    pub const SCALARS: [ProjectField; 6] = [
        Self::Title,
        Self::Subtitle,
        Self::Description,
        Self::GithubUrl,
        Self::LiveUrl,
        Self::Date,
    ];

    /// Text fields the admin must fill in before a project can be created
    pub const REQUIRED_TEXT: [ProjectField; 5] = [
        Self::Title,
        Self::Subtitle,
        Self::GithubUrl,
        Self::LiveUrl,
        Self::Description,
    ];

    /// Wire name used in multipart bodies and JSON documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Description => "description",
            Self::GithubUrl => "githubURL",
            Self::LiveUrl => "liveURL",
            Self::Date => "date",
            Self::Image => "image",
        }
    }
}

impl FromStr for ProjectField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "title" => Ok(Self::Title),
            "subtitle" => Ok(Self::Subtitle),
            "description" => Ok(Self::Description),
            "githubURL" => Ok(Self::GithubUrl),
            "liveURL" => Ok(Self::LiveUrl),
            "date" => Ok(Self::Date),
            "image" => Ok(Self::Image),
            _ => Err(CoreError::InvalidField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
