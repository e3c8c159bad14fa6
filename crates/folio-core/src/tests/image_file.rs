use crate::{CoreError, DEFAULT_MIME_TYPE, ImageFile, mime_type_for};

use std::path::Path;

use tempfile::TempDir;

#[test]
fn test_mime_type_for_known_extensions() {
    assert_eq!(mime_type_for(Path::new("a.png")), "image/png");
    assert_eq!(mime_type_for(Path::new("a.JPG")), "image/jpeg");
    assert_eq!(mime_type_for(Path::new("a.jpeg")), "image/jpeg");
    assert_eq!(mime_type_for(Path::new("dir/a.svg")), "image/svg+xml");
    assert_eq!(mime_type_for(Path::new("a.webp")), "image/webp");
}

#[test]
fn test_mime_type_for_unknown_extension() {
    assert_eq!(mime_type_for(Path::new("a.bin")), DEFAULT_MIME_TYPE);
    assert_eq!(mime_type_for(Path::new("Makefile")), DEFAULT_MIME_TYPE);
}

#[test]
fn test_from_path_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cover.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    let file = ImageFile::from_path(&path).unwrap();

    assert_eq!(file.name, "cover.gif");
    assert_eq!(file.mime_type, "image/gif");
    assert_eq!(file.len(), 6);
    assert!(!file.is_empty());
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = ImageFile::from_path(&temp.path().join("missing.png"));

    assert!(matches!(result, Err(CoreError::Io { .. })));
}
