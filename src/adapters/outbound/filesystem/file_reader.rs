use crate::ports::outbound::TemplateReader;
use crate::shared::error::SupportError;
use crate::shared::security::read_document;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the TemplateReader port with the shared
/// file-safety checks (no symlinks, regular files only, size cap).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(SupportError::InvalidTemplatePath {
                path: path.to_path_buf(),
                reason: "File does not exist".to_string(),
            }
            .into());
        }

        if path.is_dir() {
            return Err(SupportError::InvalidTemplatePath {
                path: path.to_path_buf(),
                reason: "Path is a directory".to_string(),
            }
            .into());
        }

        read_document(path, "template")
    }
}
