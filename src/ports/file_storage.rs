//! File Storage Port - Whole-file reads and writes for import/export.
//!
//! Each call opens, transfers and closes the file before returning, on every
//! path including failure. Concurrent access to the same path is not guarded.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StorageError::Io {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            StorageError::NotFound(path) | StorageError::Io { path, .. } => path,
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let path = err.path().display().to_string();
        DomainError::new(ErrorCode::IoFailure, err.to_string()).with_detail("path", path)
    }
}

/// Port for whole-file persistence.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Reads a UTF-8 text file completely.
    ///
    /// # Errors
    /// `StorageError::NotFound` when the file does not exist, `Io` otherwise.
    async fn read_to_string(&self, path: &Path) -> Result<String, StorageError>;

    /// Replaces the file's contents with `contents`.
    ///
    /// Readers never observe a partially written file.
    async fn write(&self, path: &Path, contents: &[u8]) -> Result<(), StorageError>;

    /// Checks whether a file exists at `path`.
    async fn exists(&self, path: &Path) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_maps_to_io_failure() {
        let err: DomainError = StorageError::io("/tmp/state.json", "disk full").into();
        assert_eq!(err.code, ErrorCode::IoFailure);
        assert_eq!(err.details.get("path"), Some(&"/tmp/state.json".to_string()));
        assert!(err.message.contains("disk full"));
    }

    #[test]
    fn not_found_also_maps_to_io_failure() {
        let err: DomainError = StorageError::NotFound(PathBuf::from("missing.json")).into();
        assert_eq!(err.code, ErrorCode::IoFailure);
        assert!(err.message.contains("missing.json"));
    }

    #[test]
    fn file_storage_is_object_safe() {
        fn check<T: FileStorage + ?Sized>() {}
        check::<dyn FileStorage>();
    }
}
