//! Journal ledger tests.

use crate::model::StickerMood;
use crate::test_support::{onboarded_store, ts};

#[test]
fn limit_one_returns_latest_entry() {
    let (store, clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    store.add_entry("first", vec![]).unwrap();
    clock.advance_seconds(5);
    let latest = store.add_entry("second", vec![]).unwrap().value;

    let listed = store.list_entries(Some(1));
    assert_eq!(listed, vec![latest]);
}

#[test]
fn entries_across_days_list_newest_first() {
    let (store, clock, _) = onboarded_store(ts(2024, 1, 1, 23, 0, 0));
    store.add_entry("monday night", vec![]).unwrap();
    clock.advance_days(1);
    store.add_entry("tuesday night", vec![]).unwrap();
    clock.advance_seconds(-12 * 3600);
    store.add_entry("tuesday morning", vec![]).unwrap();

    let contents: Vec<String> = store
        .list_entries(None)
        .into_iter()
        .map(|e| e.content)
        .collect();
    assert_eq!(
        contents,
        vec!["tuesday night", "tuesday morning", "monday night"]
    );
}

#[test]
fn entry_keeps_content_and_stickers() {
    let (store, _clock, _) = onboarded_store(ts(2024, 5, 6, 7, 8, 9));
    let stickers = vec![StickerMood::Lonely, StickerMood::Motivated];
    let applied = store
        .add_entry("  leading space kept", stickers.clone())
        .unwrap();

    assert_eq!(applied.value.content, "  leading space kept");
    assert_eq!(applied.value.stickers, stickers);
    assert_eq!(applied.value.date, ts(2024, 5, 6, 0, 0, 0).date_naive());
    assert_eq!(applied.value.timestamp, ts(2024, 5, 6, 7, 8, 9));
    assert_eq!(applied.record.journal_entries.last(), Some(&applied.value));
}

#[test]
fn listing_does_not_write() {
    let (store, clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    store.add_entry("one", vec![]).unwrap();
    let before = store.load().unwrap();

    clock.advance_seconds(60);
    let _ = store.list_entries(None);
    let _ = store.list_entries(Some(1));
    assert_eq!(store.load().unwrap(), before);
}

#[test]
fn entry_ids_are_distinct() {
    let (store, _clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
    let a = store.add_entry("a", vec![]).unwrap().value;
    let b = store.add_entry("b", vec![]).unwrap().value;
    assert_ne!(a.id, b.id);
}
