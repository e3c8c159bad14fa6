use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::path::Path;

use bytes::Bytes;
use error_location::ErrorLocation;

/// MIME type declared for files whose extension is not recognised
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// An image picked by the admin, held in memory until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name, without directories
    pub name: String,
    /// Declared MIME type
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ImageFile {
    pub fn new<N, M, B>(name: N, mime_type: M, bytes: B) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        B: Into<Bytes>,
    {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, declaring its MIME type from the extension.
    #[track_caller]
    pub fn from_path(path: &Path) -> CoreErrorResult<Self> {
        let location = ErrorLocation::from(Location::caller());

        let bytes = std::fs::read(path).map_err(|e| CoreError::Io {
            path: path.to_path_buf(),
            source: e,
            location,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CoreError::Validation {
                message: format!("{} does not name a file", path.display()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self::new(name, mime_type_for(path), bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Declared MIME type for a file, based on its extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        _ => DEFAULT_MIME_TYPE,
    }
}
