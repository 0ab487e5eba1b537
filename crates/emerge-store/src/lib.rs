//! # Emerge store
//!
//! Local persistent state for a single Emerge user: one JSON record holding
//! the onboarding profile, the companion, and the mood and journal ledgers,
//! plus a session flag kept under its own key.
//!
//! ## Principles
//!
//! - **One record, one writer** - every operation is a blocking
//!   read-modify-write of the whole record; last writer wins
//! - **Corruption reads as absence** - `load` never fails, it logs and
//!   returns `None`
//! - **Mutations return what they wrote** - callers render from
//!   [`Applied`] instead of reading back
//! - **Derived views are recomputed** - `moods_since`, `list_entries` and
//!   insights never mutate and keep no cache
//!
//! ## Example
//!
//! ```rust
//! use emerge_storage::MemoryStorage;
//! use emerge_store::{Interaction, Mood, PetType, Preferences, RecordStore};
//!
//! let store = RecordStore::new(Box::new(MemoryStorage::new()));
//! store.login().unwrap();
//!
//! let prefs = Preferences { name: "Ari".into(), ..Default::default() };
//! store.complete_onboarding(prefs, PetType::Cat, "Mochi").unwrap();
//!
//! store.record_mood(Mood::Happy).unwrap();
//! let pet = store.interact(Interaction::Play).unwrap().value;
//! assert_eq!(pet.happiness, 85);
//! assert!(store.gate().is_ready());
//! ```
//!
//! ## Crate Structure
//!
//! - [`record`] - Record store: load, save, create, clear
//! - [`mood`] - Mood ledger keyed by date
//! - [`journal`] - Append-only journal ledger
//! - [`companion`] - Companion interaction table and direct updates
//! - [`session`] - Session flag and onboarding gate
//! - [`insights`] - Wrapped summary, emotional drift, companion reaction
//! - [`model`] - Persisted entities and closed enums

pub mod companion;
pub mod error;
pub mod insights;
pub mod journal;
pub mod model;
pub mod mood;
pub mod record;
pub mod session;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use companion::{CompanionUpdate, Disposition, Interaction, VitalDelta};
pub use error::{StoreError, StoreResult};
pub use insights::{
    companion_reaction, detect_drift, mood_score, needs_intervention, CompanionAction,
    CompanionReaction, DriftStatus, EmotionalDrift, Insights, MoodCount, SuggestedInteraction,
    Trend, WrappedSummary,
};
pub use model::{
    CompanionState, JournalEntry, Mood, MoodCategory, MoodEntry, PetType, Preferences,
    StickerMood, TimeOfDay, UserRecord, DEFAULT_VITAL, VITAL_MAX, VITAL_MIN,
};
pub use record::{Applied, RecordStore};
pub use session::Gate;
