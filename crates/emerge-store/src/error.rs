//! Error types for the record store.

use emerge_storage::StorageError;
use thiserror::Error;

/// Errors returned by store operations.
///
/// Corrupt stored values never show up here: `load` recovers from them
/// by reporting "no record".
#[derive(Error, Debug)]
pub enum StoreError {
    /// The durable medium failed a read or write
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The record could not be encoded for writing
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A mutation needs a record but none is stored
    #[error("No user record found")]
    NoRecord,

    /// The record was already created through onboarding
    #[error("Onboarding has already been completed")]
    AlreadyOnboarded,

    /// Journal content was empty or whitespace only
    #[error("Journal entry content must not be empty")]
    EmptyContent,

    #[error("Unknown interaction: {0}")]
    UnknownInteraction(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Unknown sticker: {0}")]
    UnknownSticker(String),

    #[error("Unknown pet type: {0}")]
    UnknownPetType(String),

    #[error("Unknown time of day: {0}")]
    UnknownTimeOfDay(String),
}

impl StoreError {
    /// Check if this error came from the durable medium
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a missing-record error
    pub fn is_no_record(&self) -> bool {
        matches!(self, Self::NoRecord)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
