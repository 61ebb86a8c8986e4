use serde::{Deserialize, Serialize};

/// Default per-file size ceiling: 5 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Default number of files accepted in one upload.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Metadata of a file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Original file name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl FileUpload {
    /// Creates upload metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// Per-file constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadOptions {
    /// Maximum size in bytes.
    pub max_size: u64,
    /// Accepted MIME types; empty accepts any type.
    pub allowed_types: Vec<String>,
}

impl Default for FileUploadOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_FILE_SIZE,
            allowed_types: Vec::new(),
        }
    }
}

/// Constraints for a batch of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleFileUploadOptions {
    /// Maximum number of files.
    pub max_files: usize,
    /// Constraints applied to each file.
    pub file: FileUploadOptions,
}

impl Default for MultipleFileUploadOptions {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            file: FileUploadOptions::default(),
        }
    }
}
