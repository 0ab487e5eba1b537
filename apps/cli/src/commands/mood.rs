//! Mood check-in commands.

use super::Context;
use crate::output::{self, print_row};
use anyhow::Result;
use chrono::NaiveDate;
use emerge_store::{Mood, MoodCategory, MoodEntry};
use reflection_client::{MoodAnalysis, ReflectionRequest};
use serde_json::json;

/// Record a mood, then optionally ask the analysis service about it.
///
/// The local save always happens first. Analysis problems are reported as
/// "unavailable" and never fail the command.
pub async fn mood_log(
    ctx: &Context,
    mood: Mood,
    date: Option<NaiveDate>,
    note: Option<String>,
    reflection: Option<String>,
) -> Result<()> {
    ctx.require_ready()?;

    let date = date.unwrap_or_else(|| ctx.store.today());
    let applied = ctx.store.record_mood_on(mood, date)?;
    let entry = applied.value;

    let analysis = if note.is_some() || reflection.is_some() {
        analyze(ctx, &entry, note, reflection).await
    } else {
        None
    };

    if ctx.format.is_json() {
        output::print_json(&json!({
            "entry": entry,
            "analysis": analysis,
        }));
        return Ok(());
    }

    output::print_success(
        &format!(
            "{} Feeling {} on {}",
            entry.mood.category().emoji(),
            entry.mood,
            entry.date
        ),
        &ctx.format,
    );
    if let Some(analysis) = analysis {
        print_row("Sentiment", &format!("{:+.2}", analysis.sentiment_polarity));
        print_row("Note", &analysis.message);
    }
    Ok(())
}

async fn analyze(
    ctx: &Context,
    entry: &MoodEntry,
    note: Option<String>,
    reflection: Option<String>,
) -> Option<MoodAnalysis> {
    let Some(client) = ctx.analysis_client() else {
        tracing::debug!("No analysis service configured, skipping");
        return None;
    };

    let mut request = ReflectionRequest::new(entry.mood.as_str(), entry.mood.level());
    if let Some(note) = note {
        request = request.with_note(note);
    }
    if let Some(text) = reflection {
        request = request.with_reflection(text);
    }
    client.analyze_reflection(&request).await
}

/// Show today's check-in, if any.
pub fn mood_today(ctx: &Context) -> Result<()> {
    ctx.require_ready()?;
    let entry = ctx.store.today_mood();

    if ctx.format.is_json() {
        output::print_json(&json!({ "date": ctx.store.today(), "entry": entry }));
        return Ok(());
    }

    match entry {
        Some(entry) => println!(
            "{} {} (checked in at {})",
            entry.mood.category().emoji(),
            entry.mood,
            entry.timestamp.format("%H:%M UTC")
        ),
        None => println!("No check-in yet today. Try 'emerge mood log <mood>'."),
    }
    Ok(())
}

/// Check-ins in the trailing window, oldest first.
pub fn mood_history(ctx: &Context, days: u32) -> Result<()> {
    ctx.require_ready()?;
    let entries = ctx.store.moods_since(days);

    if ctx.format.is_json() {
        output::print_json(&entries);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No check-ins in the last {days} days.");
        return Ok(());
    }

    output::print_heading(&format!("Last {days} days"));
    for entry in &entries {
        println!(
            "  {}  {} {:<12} level {}",
            entry.date,
            entry.mood.category().emoji(),
            entry.mood.as_str(),
            entry.mood.level()
        );
    }
    Ok(())
}

/// Every selectable mood, grouped by category.
pub fn mood_catalogue(ctx: &Context) -> Result<()> {
    if ctx.format.is_json() {
        let groups: Vec<_> = MoodCategory::ALL
            .iter()
            .map(|category| {
                json!({
                    "category": category,
                    "label": category.label(),
                    "moods": category.moods(),
                })
            })
            .collect();
        output::print_json(&groups);
        return Ok(());
    }

    for category in MoodCategory::ALL {
        output::print_heading(&format!("{} {}", category.emoji(), category.label()));
        let names: Vec<&str> = category.moods().iter().map(|mood| mood.as_str()).collect();
        println!("  {}", names.join(", "));
    }
    Ok(())
}
