//! Session flag and onboarding gate.
//!
//! The session flag lives under its own key, independent of the record:
//! login sets it, logout removes it, and only `clear` touches both.

use crate::error::{StoreError, StoreResult};
use crate::model::{CompanionState, PetType, Preferences, UserRecord};
use crate::record::RecordStore;
use emerge_storage::StorageKeys;
use tracing::{info, warn};

const AUTH_VALUE: &str = "true";

/// Which surface the shell should show, derived on every call.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Session flag absent or not `"true"`
    LoggedOut,
    /// Logged in, but no record or onboarding unfinished
    Onboarding,
    /// Logged in with a completed record
    Ready(Box<UserRecord>),
}

impl Gate {
    pub fn is_ready(&self) -> bool {
        matches!(self, Gate::Ready(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gate::LoggedOut => "logged_out",
            Gate::Onboarding => "onboarding",
            Gate::Ready(_) => "ready",
        }
    }
}

impl RecordStore {
    pub fn login(&self) -> StoreResult<()> {
        self.storage().set(StorageKeys::AUTH, AUTH_VALUE)?;
        info!("Session started");
        Ok(())
    }

    /// Remove the session flag. The record stays on disk.
    pub fn logout(&self) -> StoreResult<()> {
        self.storage().delete(StorageKeys::AUTH)?;
        info!("Session ended");
        Ok(())
    }

    /// Only the literal `"true"` counts. Read failures count as logged out.
    pub fn is_authenticated(&self) -> bool {
        match self.storage().get(StorageKeys::AUTH) {
            Ok(value) => value.as_deref() == Some(AUTH_VALUE),
            Err(e) => {
                warn!(error = %e, "Failed to read session flag, treating as logged out");
                false
            }
        }
    }

    pub fn is_onboarding_complete(&self) -> bool {
        self.load().is_some_and(|record| record.onboarding_complete)
    }

    pub fn gate(&self) -> Gate {
        if !self.is_authenticated() {
            return Gate::LoggedOut;
        }
        match self.load() {
            Some(record) if record.onboarding_complete => Gate::Ready(Box::new(record)),
            _ => Gate::Onboarding,
        }
    }

    /// Create and save the record in one step.
    ///
    /// An existing completed record is never replaced; an unfinished or
    /// unreadable one is.
    pub fn complete_onboarding(
        &self,
        preferences: Preferences,
        kind: PetType,
        pet_name: &str,
    ) -> StoreResult<UserRecord> {
        if self.is_onboarding_complete() {
            return Err(StoreError::AlreadyOnboarded);
        }

        let pet = CompanionState::new(kind, pet_name, self.now());
        let mut record = self.create(preferences, pet);
        self.save(&mut record)?;

        info!(
            record_id = %record.id,
            pet_type = %record.pet.kind,
            pet_name = %record.pet.name,
            "Onboarding complete"
        );
        Ok(record)
    }
}
