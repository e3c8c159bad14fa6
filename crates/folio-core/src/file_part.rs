use crate::ImageFile;

use bytes::Bytes;

/// Binary segment of a multipart body: content, original file name and the
/// declared MIME type of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime_type: String,
    pub content: Bytes,
}

impl FilePart {
    /// Wrap a selected file for upload. Content is shared, not copied.
    pub fn package(file: &ImageFile) -> Self {
        Self {
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            content: file.bytes.clone(),
        }
    }
}

impl From<&ImageFile> for FilePart {
    fn from(file: &ImageFile) -> Self {
        Self::package(file)
    }
}
