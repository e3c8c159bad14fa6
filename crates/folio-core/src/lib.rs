//! folio-core
//!
//! Domain types shared by the admin tooling: the remote project entity, the
//! client-side form draft, the field schema and the multipart file packaging.

mod error;
mod field_errors;
mod file_part;
mod image_file;
mod project;
mod project_draft;
mod project_field;
mod project_payload;
mod project_schema;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use field_errors::FieldErrors;
pub use file_part::FilePart;
pub use image_file::{DEFAULT_MIME_TYPE, ImageFile, mime_type_for};
pub use project::Project;
pub use project_draft::{ProjectDraft, current_date};
pub use project_field::ProjectField;
pub use project_payload::{
    BLOB_FILE_PART, CreateProjectPayload, FILE_NAME_FIELD, ProjectFields, UpdateProjectPayload,
};
pub use project_schema::{
    Constraint, DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MAX_SUBTITLE_LENGTH,
    DEFAULT_MAX_TITLE_LENGTH, FieldRule, ProjectSchema,
};
