//! Journal commands.

use super::Context;
use crate::output;
use anyhow::Result;
use emerge_store::{JournalEntry, StickerMood};

pub fn journal_add(ctx: &Context, content: String, stickers: Vec<StickerMood>) -> Result<()> {
    ctx.require_ready()?;
    let entry = ctx.store.add_entry(content, stickers)?.value;

    if ctx.format.is_json() {
        output::print_json(&entry);
    } else {
        output::print_success(&format!("Saved entry for {}", entry.date), &ctx.format);
    }
    Ok(())
}

pub fn journal_list(ctx: &Context, limit: Option<usize>) -> Result<()> {
    ctx.require_ready()?;
    let entries = ctx.store.list_entries(limit);

    if ctx.format.is_json() {
        output::print_json(&entries);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Your journal is empty. Try 'emerge journal add \"...\"'.");
        return Ok(());
    }

    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

fn print_entry(entry: &JournalEntry) {
    output::print_heading(&format!(
        "{}  {}",
        entry.timestamp.format("%Y-%m-%d %H:%M"),
        sticker_line(&entry.stickers)
    ));
    println!("{}", entry.content);
}

fn sticker_line(stickers: &[StickerMood]) -> String {
    stickers
        .iter()
        .map(|sticker| sticker.emoji())
        .collect::<Vec<_>>()
        .join(" ")
}
