//! Journal ledger: append-only free-text entries.

use crate::error::{StoreError, StoreResult};
use crate::model::{JournalEntry, StickerMood, UserRecord};
use crate::record::{Applied, RecordStore};
use std::cmp::Reverse;
use tracing::info;

impl UserRecord {
    /// Entries newest first by full timestamp, truncated to `limit`.
    pub fn list_entries(&self, limit: Option<usize>) -> Vec<JournalEntry> {
        let mut entries = self.journal_entries.clone();
        entries.sort_by_key(|entry| Reverse(entry.timestamp));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }
}

impl RecordStore {
    /// Append a journal entry dated today.
    ///
    /// Blank content is rejected before anything is read or written.
    pub fn add_entry(
        &self,
        content: impl Into<String>,
        stickers: Vec<StickerMood>,
    ) -> StoreResult<Applied<JournalEntry>> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let id = self.generate_id();
        let applied = self.mutate(|record, now| {
            let entry = JournalEntry {
                id,
                date: now.date_naive(),
                content,
                stickers,
                timestamp: now,
            };
            record.journal_entries.push(entry.clone());
            Ok(entry)
        })?;

        info!(
            entry_id = %applied.value.id,
            stickers = applied.value.stickers.len(),
            "Added journal entry"
        );
        Ok(applied)
    }

    /// Stored entries, newest first. Empty when no record is stored.
    pub fn list_entries(&self, limit: Option<usize>) -> Vec<JournalEntry> {
        match self.load() {
            Some(record) => record.list_entries(limit),
            None => Vec::new(),
        }
    }
}
