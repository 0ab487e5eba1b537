//! Derived views: the wrapped recap and emotional drift.

use super::Context;
use crate::output::{self, print_row};
use anyhow::Result;
use emerge_store::DriftStatus;

pub fn wrapped(ctx: &Context, days: u32) -> Result<()> {
    let record = ctx.require_ready()?;
    let summary = record.wrapped(ctx.store.today(), days);

    if ctx.format.is_json() {
        output::print_json(&summary);
        return Ok(());
    }

    output::print_heading(&format!("Your last {days} days"));
    print_row("Check-ins", &summary.check_ins.to_string());
    print_row(
        "Top mood",
        &format!("{} {}", summary.top_mood.category().emoji(), summary.top_mood),
    );
    print_row("Journal entries", &summary.journal_entries.to_string());
    print_row(
        "Companion",
        &format!(
            "{} ({} interactions)",
            summary.pet_name, summary.total_interactions
        ),
    );

    if !summary.mood_counts.is_empty() {
        output::print_heading("Moods");
        for count in &summary.mood_counts {
            print_row(count.mood.as_str(), &count.count.to_string());
        }
    }
    Ok(())
}

pub fn insights(ctx: &Context, days: u32) -> Result<()> {
    let record = ctx.require_ready()?;
    let insights = record.insights(ctx.store.today(), days);

    if ctx.format.is_json() {
        output::print_json(&insights);
        return Ok(());
    }

    output::print_heading(&format!("Insights, last {days} days"));
    match insights.drift.status {
        DriftStatus::Success => {
            print_row("Trend", insights.drift.trend.as_str());
            print_row("Slope", &format!("{:+.3}", insights.drift.slope));
            print_row("Volatility", &format!("{:.3}", insights.drift.volatility));
        }
        DriftStatus::InsufficientData => {
            print_row("Trend", "not enough check-ins yet");
        }
    }
    print_row("Suggestion", insights.drift.recommendation);
    print_row(
        &record.pet.name,
        &format!(
            "{} (try: {})",
            insights.reaction.action.as_str(),
            insights.reaction.suggested_interaction.as_str()
        ),
    );
    if insights.intervention {
        println!();
        println!("Things look heavy lately. Be gentle with yourself, and reach out to someone you trust.");
    }
    Ok(())
}
