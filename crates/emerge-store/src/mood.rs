//! Mood ledger: at most one check-in per calendar date.

use crate::error::StoreResult;
use crate::model::{Mood, MoodEntry, UserRecord};
use crate::record::{Applied, RecordStore};
use chrono::{Days, NaiveDate};
use tracing::info;

/// First date inside a window of `days` days ending today.
pub(crate) fn window_start(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

impl UserRecord {
    /// Insert `entry`, dropping any existing entry for the same date.
    pub fn put_mood(&mut self, entry: MoodEntry) {
        self.mood_history.retain(|existing| existing.date != entry.date);
        self.mood_history.push(entry);
    }

    /// Exact-date lookup.
    pub fn mood_on(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.mood_history.iter().find(|entry| entry.date == date)
    }

    /// Entries dated on or after `today - days`, oldest first.
    pub fn moods_since(&self, today: NaiveDate, days: u32) -> Vec<MoodEntry> {
        let cutoff = window_start(today, days);

        let mut entries: Vec<MoodEntry> = self
            .mood_history
            .iter()
            .filter(|entry| entry.date >= cutoff)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.date);
        entries
    }
}

impl RecordStore {
    /// Record today's mood, replacing any earlier check-in for today.
    pub fn record_mood(&self, mood: Mood) -> StoreResult<Applied<MoodEntry>> {
        self.record_mood_on(mood, self.today())
    }

    /// Record a mood for an explicit date, replacing any entry for that date.
    pub fn record_mood_on(&self, mood: Mood, date: NaiveDate) -> StoreResult<Applied<MoodEntry>> {
        let id = self.generate_id();
        let applied = self.mutate(|record, now| {
            let entry = MoodEntry {
                id,
                date,
                mood,
                timestamp: now,
            };
            record.put_mood(entry.clone());
            Ok(entry)
        })?;

        info!(%date, mood = %mood, "Recorded mood");
        Ok(applied)
    }

    /// Mood recorded for `date` in the stored record, if any.
    pub fn mood_on(&self, date: NaiveDate) -> Option<MoodEntry> {
        self.load().and_then(|record| record.mood_on(date).cloned())
    }

    pub fn today_mood(&self) -> Option<MoodEntry> {
        self.mood_on(self.today())
    }

    /// Entries from the last `days` days, oldest first. Empty when no
    /// record is stored.
    pub fn moods_since(&self, days: u32) -> Vec<MoodEntry> {
        match self.load() {
            Some(record) => record.moods_since(self.today(), days),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{onboarded_store, ts};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, date: NaiveDate, mood: Mood) -> MoodEntry {
        MoodEntry {
            id: id.to_string(),
            date,
            mood,
            timestamp: ts(2024, 1, 1, 0, 0, 0),
        }
    }

    #[test]
    fn put_mood_replaces_same_date() {
        let (_store, _clock, mut record) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
        record.put_mood(entry("a", day(2024, 1, 1), Mood::Happy));
        record.put_mood(entry("b", day(2024, 1, 2), Mood::Calm));
        record.put_mood(entry("c", day(2024, 1, 1), Mood::Sad));

        assert_eq!(record.mood_history.len(), 2);
        assert_eq!(record.mood_on(day(2024, 1, 1)).unwrap().id, "c");
    }

    #[test]
    fn moods_since_is_inclusive_and_sorted() {
        let (_store, _clock, mut record) = onboarded_store(ts(2024, 1, 10, 8, 0, 0));
        record.put_mood(entry("late", day(2024, 1, 9), Mood::Happy));
        record.put_mood(entry("edge", day(2024, 1, 3), Mood::Okay));
        record.put_mood(entry("old", day(2024, 1, 2), Mood::Sad));
        record.put_mood(entry("mid", day(2024, 1, 5), Mood::Calm));

        let since = record.moods_since(day(2024, 1, 10), 7);
        let ids: Vec<&str> = since.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["edge", "mid", "late"]);
    }

    #[test]
    fn moods_since_zero_days_is_today_only() {
        let (_store, _clock, mut record) = onboarded_store(ts(2024, 1, 10, 8, 0, 0));
        record.put_mood(entry("y", day(2024, 1, 9), Mood::Happy));
        record.put_mood(entry("t", day(2024, 1, 10), Mood::Happy));

        let since = record.moods_since(day(2024, 1, 10), 0);
        assert_eq!(since.len(), 1);
        assert_eq!(since[0].id, "t");
    }

    #[test]
    fn record_mood_uses_clock_date() {
        let (store, clock, _) = onboarded_store(ts(2024, 3, 4, 23, 59, 0));
        let applied = store.record_mood(Mood::Hopeful).unwrap();
        assert_eq!(applied.value.date, day(2024, 3, 4));
        assert_eq!(applied.value.timestamp, ts(2024, 3, 4, 23, 59, 0));

        clock.advance_seconds(120);
        assert!(store.today_mood().is_none());
        assert_eq!(store.mood_on(day(2024, 3, 4)).unwrap().mood, Mood::Hopeful);
    }
}
