//! Session flag and onboarding gate tests.

use emerge_storage::StorageKeys;

use crate::error::StoreError;
use crate::model::{CompanionState, PetType, Preferences};
use crate::session::Gate;
use crate::test_support::{fixed_store, onboarded_store, ts};

fn prefs(name: &str) -> Preferences {
    Preferences {
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn logged_out_hides_existing_record() {
    let (store, _clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    assert_eq!(store.gate(), Gate::LoggedOut);
    assert!(store.load().is_some());
}

#[test]
fn logged_in_without_record_is_onboarding() {
    let (store, _clock) = fixed_store(ts(2024, 1, 1, 8, 0, 0));
    store.login().unwrap();
    assert_eq!(store.gate(), Gate::Onboarding);
}

#[test]
fn unfinished_record_is_onboarding() {
    let (store, _clock) = fixed_store(ts(2024, 1, 1, 8, 0, 0));
    store.login().unwrap();
    let pet = CompanionState::new(PetType::Bird, "Kiwi", store.now());
    let mut record = store.create(prefs("Ari"), pet);
    record.onboarding_complete = false;
    store.save(&mut record).unwrap();

    assert_eq!(store.gate(), Gate::Onboarding);

    // An unfinished record may be replaced by onboarding
    let finished = store
        .complete_onboarding(prefs("Ari"), PetType::Bird, "Kiwi")
        .unwrap();
    assert_ne!(finished.id, record.id);
    assert!(store.gate().is_ready());
}

#[test]
fn onboarding_is_one_way() {
    let (store, _clock) = fixed_store(ts(2024, 1, 1, 8, 0, 0));
    store.login().unwrap();
    let first = store
        .complete_onboarding(prefs("Ari"), PetType::Cat, "Mochi")
        .unwrap();

    let again = store.complete_onboarding(prefs("Other"), PetType::Dog, "Rex");
    assert!(matches!(again, Err(StoreError::AlreadyOnboarded)));
    assert_eq!(store.load().unwrap(), first);
}

#[test]
fn logout_keeps_record() {
    let (store, _clock, record) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    store.login().unwrap();
    assert!(store.gate().is_ready());

    store.logout().unwrap();
    assert_eq!(store.gate(), Gate::LoggedOut);

    store.login().unwrap();
    assert_eq!(store.gate(), Gate::Ready(Box::new(record)));
}

#[test]
fn garbage_session_flag_is_logged_out() {
    let (store, _clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    store.storage().set(StorageKeys::AUTH, "yes").unwrap();
    assert_eq!(store.gate(), Gate::LoggedOut);
}

#[test]
fn corrupt_record_with_session_is_onboarding() {
    let (store, _clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    store.login().unwrap();
    store
        .storage()
        .set(StorageKeys::USER_DATA, "not json")
        .unwrap();
    assert_eq!(store.gate(), Gate::Onboarding);
}

#[test]
fn onboarding_defaults() {
    let (store, _clock) = fixed_store(ts(2024, 1, 1, 8, 0, 0));
    let record = store
        .complete_onboarding(Preferences::default(), PetType::default(), "")
        .unwrap();

    assert_eq!(record.pet.kind, PetType::Dog);
    assert_eq!(record.pet.name, "Dog");
    assert_eq!(record.pet.total_interactions, 0);
    assert_eq!(record.created_at, ts(2024, 1, 1, 8, 0, 0));
}

#[test]
fn update_preferences_persists() {
    let (store, _clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    let mut updated = prefs("Robin");
    updated.favorite_artists = vec!["Phoebe Bridgers".to_string()];

    let record = store.update_preferences(updated.clone()).unwrap();
    assert_eq!(record.preferences, updated);
    assert_eq!(store.load().unwrap().preferences, updated);
}
