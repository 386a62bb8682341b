//! In-Memory File Storage Adapter
//!
//! Keeps files in a map keyed by path. Useful for testing handlers without
//! touching the filesystem.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{FileStorage, StorageError};

/// In-memory storage for files
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStorage {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    fail_writes: bool,
}

impl InMemoryFileStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage whose writes always fail with an I/O error
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Seed a file
    pub async fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.write().await.insert(path.into(), contents.into());
    }

    /// Raw contents of a stored file
    pub async fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.read().await.get(path).cloned()
    }

    /// Number of stored files
    pub async fn file_count(&self) -> usize {
        self.files.read().await.len()
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn read_to_string(&self, path: &Path) -> Result<String, StorageError> {
        let files = self.files.read().await;
        let bytes = files
            .get(path)
            .ok_or_else(|| StorageError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone()).map_err(|e| StorageError::io(path, e.to_string()))
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::io(path, "simulated write failure"));
        }
        self.files
            .write()
            .await
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.read().await.contains_key(path)
    }
}
