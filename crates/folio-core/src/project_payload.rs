use crate::{FilePart, ProjectField};

/// Multipart part name carrying the image bytes
pub const BLOB_FILE_PART: &str = "blobFile";
/// Multipart text field carrying the original image file name
pub const FILE_NAME_FIELD: &str = "fileName";

/// The six scalar values submitted with every create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub github_url: String,
    pub live_url: String,
    pub date: String,
}

impl ProjectFields {
    /// Field/value pairs in submission order
    pub fn entries(&self) -> [(ProjectField, &str); 6] {
        [
            (ProjectField::Title, &self.title),
            (ProjectField::Subtitle, &self.subtitle),
            (ProjectField::Description, &self.description),
            (ProjectField::GithubUrl, &self.github_url),
            (ProjectField::LiveUrl, &self.live_url),
            (ProjectField::Date, &self.date),
        ]
    }
}

/// Body of a creation request. An image is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectPayload {
    pub fields: ProjectFields,
    pub image: FilePart,
}

/// Body of an update request.
///
/// `image` is `None` when no new file was chosen; the stored image is then
/// left as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectPayload {
    pub fields: ProjectFields,
    pub image: Option<FilePart>,
}
