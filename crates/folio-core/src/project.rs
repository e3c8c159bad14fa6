//! Project entity as stored by the remote backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio project.
///
/// The backend owns this record; the admin only ever holds a copy that may be
/// stale by the time an edit is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Public URL of the stored image
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(rename = "githubURL")]
    pub github_url: String,
    #[serde(rename = "liveURL")]
    pub live_url: String,
    pub date: DateTime<Utc>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
