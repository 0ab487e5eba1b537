//! Durable key-value storage for Emerge.
//!
//! This crate provides the medium the record store persists into:
//! - **FileStorage**: one file per key under a directory, written atomically
//! - **MemoryStorage**: in-process map for tests and throwaway sessions
//!
//! The store only ever touches the fixed keys in [`StorageKeys`].

mod file;
mod keys;
mod memory;
mod traits;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;

use std::path::Path;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains characters that cannot be mapped onto the medium
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Stored bytes are not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Backend refused or failed the operation (quota, poisoned lock, ...)
    #[error("Backend error: {0}")]
    Backend(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Create the default on-disk storage rooted at `dir`.
pub fn create_storage(dir: &Path) -> StorageResult<Box<dyn KeyValueStorage>> {
    let storage = FileStorage::open(dir)?;
    Ok(Box::new(storage))
}
