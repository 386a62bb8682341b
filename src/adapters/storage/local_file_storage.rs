//! Local Filesystem Storage Adapter - Implementation of FileStorage.
//!
//! Uses a write-to-temp-then-rename pattern so a crash mid-write never
//! leaves a truncated state or results file behind.

use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{FileStorage, StorageError};

/// Maximum file size accepted on read (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Local filesystem storage.
///
/// # Atomic Writes
///
/// 1. Write content to `{path}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{path}`
#[derive(Debug, Clone, Default)]
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    /// Returns the temporary sibling path used during writes.
    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("export"));
        name.push(".tmp");
        path.with_file_name(name)
    }

    /// Ensures the parent directory exists.
    async fn ensure_parent(path: &Path) -> Result<(), StorageError> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::io(dir, format!("failed to create directory: {}", e))),
            _ => Ok(()),
        }
    }

    async fn write_temp(temp_path: &Path, contents: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| StorageError::io(temp_path, format!("failed to create: {}", e)))?;

        file.write_all(contents)
            .await
            .map_err(|e| StorageError::io(temp_path, format!("failed to write: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| StorageError::io(temp_path, format!("failed to sync: {}", e)))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn read_to_string(&self, path: &Path) -> Result<String, StorageError> {
        let meta = fs::metadata(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
            _ => StorageError::io(path, e.to_string()),
        })?;
        if meta.len() > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::io(
                path,
                format!("file is {} bytes, limit is {}", meta.len(), MAX_FILE_SIZE_BYTES),
            ));
        }

        let text = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
            _ => StorageError::io(path, e.to_string()),
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "file read");
        Ok(text)
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> Result<(), StorageError> {
        Self::ensure_parent(path).await?;

        let temp_path = Self::temp_path(path);
        if let Err(err) = Self::write_temp(&temp_path, contents).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(err);
        }

        if let Err(e) = fs::rename(&temp_path, path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(path, format!("failed to replace: {}", e)));
        }

        tracing::debug!(path = %path.display(), bytes = contents.len(), "file written");
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }
}
