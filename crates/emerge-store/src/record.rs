//! Record store: owns the single user record in the durable medium.

use crate::error::{StoreError, StoreResult};
use crate::model::{CompanionState, Preferences, UserRecord};
use chrono::{DateTime, NaiveDate, Utc};
use emerge_storage::{KeyValueStorage, StorageKeys};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, error, info, warn};
use ulid::Ulid;

/// Result of a mutation: the sub-entity it produced plus the record as written.
///
/// Callers render from `record` directly instead of reading the store again.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub value: T,
    pub record: UserRecord,
}

/// Handle over the durable medium holding the user record and session flag.
///
/// Every operation is a blocking read-modify-write against storage. There is
/// no cache and no locking: exactly one writer is assumed, and concurrent
/// writers overwrite each other (last writer wins).
pub struct RecordStore {
    storage: Box<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    /// Create a store over the given backend using the system clock.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self::with_clock(storage, Arc::new(DefaultClock))
    }

    /// Create a store with an explicit clock (tests pin or advance time).
    pub fn with_clock(storage: Box<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Current instant according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Current UTC calendar date.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Generate an identifier unique within this device.
    ///
    /// ULIDs carry the creation millisecond followed by 80 random bits.
    pub fn generate_id(&self) -> String {
        Ulid::from_datetime(SystemTime::from(self.now())).to_string()
    }

    pub(crate) fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    // ==========================================
    // Load / save
    // ==========================================

    /// Read the stored record.
    ///
    /// Never fails: a missing, unreadable or structurally invalid value is
    /// logged and reported as `None`.
    pub fn load(&self) -> Option<UserRecord> {
        let raw = match self.storage.get(StorageKeys::USER_DATA) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No user record stored");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read user record, treating as absent");
                return None;
            }
        };

        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(record) => {
                debug!(record_id = %record.id, "Loaded user record");
                Some(record)
            }
            Err(e) => {
                warn!(error = %e, bytes = raw.len(), "Stored user record is corrupt, treating as absent");
                None
            }
        }
    }

    /// Stamp `last_active`, serialize and write the record, replacing any
    /// previous one unconditionally.
    ///
    /// On failure the caller's copy keeps the new stamp; nothing is rolled back.
    pub fn save(&self, record: &mut UserRecord) -> StoreResult<()> {
        record.last_active = self.now();
        let json = serde_json::to_string(record)?;

        self.storage
            .set(StorageKeys::USER_DATA, &json)
            .map_err(|e| {
                error!(record_id = %record.id, error = %e, "Failed to save user record");
                StoreError::from(e)
            })?;

        debug!(record_id = %record.id, bytes = json.len(), "Saved user record");
        Ok(())
    }

    /// Build a fresh record. Does not persist; call [`RecordStore::save`].
    pub fn create(&self, preferences: Preferences, pet: CompanionState) -> UserRecord {
        let now = self.now();
        UserRecord {
            id: self.generate_id(),
            preferences,
            pet,
            mood_history: Vec::new(),
            journal_entries: Vec::new(),
            onboarding_complete: true,
            created_at: now,
            last_active: now,
        }
    }

    /// Delete the record and the session flag. Safe to call when nothing exists.
    pub fn clear(&self) -> StoreResult<()> {
        for key in StorageKeys::ALL {
            self.storage.delete(key)?;
        }
        info!("Cleared all stored data");
        Ok(())
    }

    /// Load, apply `f`, save, and hand back both the produced value and the
    /// record as written.
    pub(crate) fn mutate<T, F>(&self, f: F) -> StoreResult<Applied<T>>
    where
        F: FnOnce(&mut UserRecord, DateTime<Utc>) -> StoreResult<T>,
    {
        let mut record = self.load().ok_or(StoreError::NoRecord)?;
        let value = f(&mut record, self.now())?;
        self.save(&mut record)?;
        Ok(Applied { value, record })
    }

    /// Replace the onboarding profile.
    pub fn update_preferences(&self, preferences: Preferences) -> StoreResult<UserRecord> {
        let applied = self.mutate(|record, _| {
            record.preferences = preferences;
            Ok(())
        })?;
        info!(record_id = %applied.record.id, "Updated preferences");
        Ok(applied.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PetType;
    use crate::test_support::{fixed_store, ts};
    use emerge_storage::MemoryStorage;

    #[test]
    fn create_sets_identity_and_timestamps() {
        let (store, _clock) = fixed_store(ts(2024, 1, 1, 8, 0, 0));
        let pet = CompanionState::new(PetType::Cat, "Mochi", store.now());
        let record = store.create(Preferences::default(), pet);

        assert!(!record.id.is_empty());
        assert!(record.onboarding_complete);
        assert!(record.mood_history.is_empty());
        assert!(record.journal_entries.is_empty());
        assert_eq!(record.created_at, ts(2024, 1, 1, 8, 0, 0));
        assert_eq!(record.last_active, record.created_at);
    }

    #[test]
    fn create_does_not_persist() {
        let (store, _clock) = fixed_store(ts(2024, 1, 1, 8, 0, 0));
        let pet = CompanionState::new(PetType::Dog, "Rex", store.now());
        let _ = store.create(Preferences::default(), pet);
        assert!(store.load().is_none());
    }

    #[test]
    fn ids_are_unique() {
        let store = RecordStore::new(Box::new(MemoryStorage::new()));
        let ids: std::collections::HashSet<String> =
            (0..500).map(|_| store.generate_id()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn mutate_without_record_is_no_record() {
        let (store, _clock) = fixed_store(ts(2024, 1, 1, 8, 0, 0));
        let result = store.mutate(|_, _| Ok(()));
        assert!(matches!(result, Err(StoreError::NoRecord)));
    }
}
