//! Storage Adapters
//!
//! Implementations of the FileStorage port.
//!
//! ## Available Adapters
//!
//! - **LocalFileStorage** - Atomic whole-file writes on the local filesystem
//! - **InMemoryFileStorage** - Map-backed storage (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryFileStorage, LocalFileStorage};
//!
//! // Production: local filesystem
//! let storage = LocalFileStorage::new();
//!
//! // Testing: in-memory storage
//! let storage = InMemoryFileStorage::new();
//! ```

mod in_memory_file_storage;
mod local_file_storage;

pub use in_memory_file_storage::InMemoryFileStorage;
pub use local_file_storage::LocalFileStorage;
