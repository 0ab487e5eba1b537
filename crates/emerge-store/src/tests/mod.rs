//! Integration tests for the record store.
//!
//! - `durability.rs` - save/load round trips, corruption recovery, reset
//! - `mood.rs`       - one entry per date, window queries
//! - `journal.rs`    - append order, newest-first listing, limits
//! - `companion.rs`  - clamping, interaction counting, direct updates
//! - `session.rs`    - session flag and the three-state gate
//! - `failures.rs`   - write failures injected at the storage layer
//! - `properties.rs` - invariants checked over generated sequences

mod journal;
mod session;

use crate::companion::Interaction;
use crate::model::{Mood, PetType, Preferences, StickerMood};
use crate::session::Gate;
use crate::test_support::{fixed_store, ts};

/// Full flow from a cold start to a populated record.
#[test]
fn basic_workflow() {
    let (store, clock) = fixed_store(ts(2024, 1, 1, 9, 0, 0));
    assert_eq!(store.gate(), Gate::LoggedOut);

    store.login().unwrap();
    assert_eq!(store.gate(), Gate::Onboarding);

    let prefs = Preferences {
        name: "Ari".to_string(),
        interests: vec!["reading".to_string()],
        ..Default::default()
    };
    let record = store
        .complete_onboarding(prefs, PetType::Cat, "Mochi")
        .unwrap();
    assert!(record.onboarding_complete);

    store.record_mood(Mood::Happy).unwrap();
    clock.advance_seconds(60);
    store
        .add_entry("first entry", vec![StickerMood::Happy])
        .unwrap();
    let applied = store.interact(Interaction::Feed).unwrap();

    assert_eq!(applied.record.mood_history.len(), 1);
    assert_eq!(applied.record.journal_entries.len(), 1);
    assert_eq!(applied.value.total_interactions, 1);

    match store.gate() {
        Gate::Ready(loaded) => assert_eq!(*loaded, applied.record),
        other => panic!("expected ready gate, got {other:?}"),
    }
}
