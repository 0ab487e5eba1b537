//! Shared test doubles for store tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use emerge_storage::MemoryStorage;
use mockable::Clock;

use crate::model::{CompanionState, PetType, Preferences, UserRecord};
use crate::record::RecordStore;

pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    pub fn advance_days(&self, days: i64) {
        *self.lock_clock() += TimeDelta::days(days);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(year, month, day, hour, min, sec) {
        chrono::LocalResult::Single(at) => at,
        _ => panic!("invalid timestamp {year}-{month}-{day} {hour}:{min}:{sec}"),
    }
}

/// In-memory store pinned to `at`.
pub fn fixed_store(at: DateTime<Utc>) -> (RecordStore, Arc<MutableClock>) {
    let clock = Arc::new(MutableClock::new(at));
    let store = RecordStore::with_clock(Box::new(MemoryStorage::new()), clock.clone());
    (store, clock)
}

/// In-memory store pinned to `at` holding a saved record with a cat named Mochi.
pub fn onboarded_store(at: DateTime<Utc>) -> (RecordStore, Arc<MutableClock>, UserRecord) {
    let (store, clock) = fixed_store(at);
    let preferences = Preferences {
        name: "Ari".to_string(),
        ..Default::default()
    };
    let pet = CompanionState::new(PetType::Cat, "Mochi", at);
    let mut record = store.create(preferences, pet);
    if let Err(e) = store.save(&mut record) {
        panic!("seed save failed: {e}");
    }
    (store, clock, record)
}
