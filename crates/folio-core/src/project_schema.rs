//! Declarative field constraints for the project edit form.
//!
//! Validation is synchronous and has no side effects: it only reads the draft
//! and the optional newly selected image and returns the violations found.

use crate::{FieldErrors, ImageFile, ProjectDraft, ProjectField};

use chrono::DateTime;
use url::Url;

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;
pub const DEFAULT_MAX_SUBTITLE_LENGTH: usize = 150;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 5000;

/// A single check applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must contain something other than whitespace
    Required,
    /// Value must not exceed this many characters
    MaxLength(usize),
    /// Absolute `http` or `https` URL
    HttpUrl,
    /// RFC 3339 timestamp
    Rfc3339,
    /// MIME type in the `image/*` family
    ImageMimeType,
}

impl Constraint {
    /// Message for a violation, or `None` when the value satisfies the check
    pub fn check(&self, field: ProjectField, value: &str) -> Option<String> {
        match self {
            Self::Required => value
                .trim()
                .is_empty()
                .then(|| format!("{} is required", field)),
            Self::MaxLength(max) => (value.chars().count() > *max)
                .then(|| format!("{} must not exceed {} characters", field, max)),
            Self::HttpUrl => (!is_http_url(value))
                .then(|| format!("{} must be a valid http(s) URL", field)),
            Self::Rfc3339 => DateTime::parse_from_rfc3339(value)
                .is_err()
                .then(|| format!("{} must be an RFC 3339 timestamp", field)),
            Self::ImageMimeType => (!value.starts_with("image/"))
                .then(|| format!("{} must be an image file, got {}", field, value)),
        }
    }
}

/// Constraints declared for one field, checked in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: ProjectField,
    pub constraints: Vec<Constraint>,
}

/// Constraint set for the project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSchema {
    pub max_title_length: usize,
    pub max_subtitle_length: usize,
    pub max_description_length: usize,
}

impl Default for ProjectSchema {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_subtitle_length: DEFAULT_MAX_SUBTITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ProjectSchema {
    pub fn rules(&self) -> Vec<FieldRule> {
        use Constraint::*;

        vec![
            FieldRule {
                field: ProjectField::Title,
                constraints: vec![Required, MaxLength(self.max_title_length)],
            },
            FieldRule {
                field: ProjectField::Subtitle,
                constraints: vec![Required, MaxLength(self.max_subtitle_length)],
            },
            FieldRule {
                field: ProjectField::Description,
                constraints: vec![Required, MaxLength(self.max_description_length)],
            },
            FieldRule {
                field: ProjectField::GithubUrl,
                constraints: vec![Required, HttpUrl],
            },
            FieldRule {
                field: ProjectField::LiveUrl,
                constraints: vec![Required, HttpUrl],
            },
            FieldRule {
                field: ProjectField::Date,
                constraints: vec![Required, Rfc3339],
            },
            FieldRule {
                field: ProjectField::Image,
                constraints: vec![ImageMimeType],
            },
        ]
    }

    /// Check a draft and the optional replacement image.
    ///
    /// Only the first violated constraint of each field is reported. The
    /// image rule applies to a newly selected file; without one it passes.
    pub fn validate(
        &self,
        draft: &ProjectDraft,
        image: Option<&ImageFile>,
    ) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for rule in self.rules() {
            let value = match rule.field {
                ProjectField::Image => match image {
                    Some(file) => file.mime_type.as_str(),
                    None => continue,
                },
                field => draft.get(field),
            };

            if let Some(message) = rule
                .constraints
                .iter()
                .find_map(|constraint| constraint.check(rule.field, value))
            {
                errors.insert(rule.field, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_http_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    Url::parse(value)
        .ok()
        .is_some_and(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}
