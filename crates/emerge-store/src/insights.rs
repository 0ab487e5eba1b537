//! Derived views over the ledgers: wrapped summary, emotional drift and
//! the companion's advisory reaction.
//!
//! Nothing here is persisted. Every view is recomputed from the record.

use crate::model::{Mood, MoodEntry, PetType, UserRecord};
use crate::mood::window_start;
use crate::record::RecordStore;
use chrono::NaiveDate;
use serde::Serialize;

/// Slope above which the trend counts as improving (and below its negation, declining).
pub const TREND_THRESHOLD: f64 = 0.05;
/// Slope below which an intervention is suggested.
pub const INTERVENTION_SLOPE: f64 = -0.1;
/// Current score below which an intervention is suggested.
pub const INTERVENTION_SCORE: f64 = -0.5;

// ============================================================================
// Wrapped summary
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

/// Period recap shown on the "wrapped" cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrappedSummary {
    pub days: u32,
    pub check_ins: usize,
    /// Most frequent first; ties keep first-seen order
    pub mood_counts: Vec<MoodCount>,
    pub top_mood: Mood,
    pub journal_entries: usize,
    pub pet_name: String,
    pub pet_type: PetType,
    pub total_interactions: u64,
}

fn count_moods(entries: &[MoodEntry]) -> Vec<MoodCount> {
    let mut counts: Vec<MoodCount> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|c| c.mood == entry.mood) {
            Some(existing) => existing.count += 1,
            None => counts.push(MoodCount {
                mood: entry.mood,
                count: 1,
            }),
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

impl UserRecord {
    pub fn wrapped(&self, today: NaiveDate, days: u32) -> WrappedSummary {
        let moods = self.moods_since(today, days);
        let mood_counts = count_moods(&moods);
        let top_mood = mood_counts.first().map_or(Mood::Calm, |c| c.mood);
        let start = window_start(today, days);
        let journal_entries = self
            .journal_entries
            .iter()
            .filter(|entry| entry.date >= start)
            .count();

        WrappedSummary {
            days,
            check_ins: moods.len(),
            mood_counts,
            top_mood,
            journal_entries,
            pet_name: self.pet.name.clone(),
            pet_type: self.pet.kind,
            total_interactions: self.pet.total_interactions,
        }
    }
}

// ============================================================================
// Emotional drift
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Trend::Declining => {
                "Consider a grounding exercise or connecting with your comfort person."
            }
            Trend::Improving => "Great momentum! Capture this feeling.",
            Trend::Stable => "Maintain your routine.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftStatus {
    Success,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalDrift {
    pub status: DriftStatus,
    pub trend: Trend,
    pub slope: f64,
    /// Population standard deviation of the scores
    pub volatility: f64,
    pub recommendation: &'static str,
}

/// Map a mood onto [-1, 1] via its 1..=5 level.
pub fn mood_score(mood: Mood) -> f64 {
    (f64::from(mood.level()) - 3.0) / 2.0
}

/// Least-squares slope of `scores` against their index.
pub fn detect_drift(scores: &[f64]) -> EmotionalDrift {
    if scores.len() < 2 {
        return EmotionalDrift {
            status: DriftStatus::InsufficientData,
            trend: Trend::Stable,
            slope: 0.0,
            volatility: 0.0,
            recommendation: Trend::Stable.recommendation(),
        };
    }

    let n = scores.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = scores.iter().sum::<f64>() / n;

    let (mut covariance, mut spread) = (0.0, 0.0);
    for (i, y) in scores.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance += dx * (y - mean_y);
        spread += dx * dx;
    }
    let slope = covariance / spread;

    let variance = scores.iter().map(|y| (y - mean_y).powi(2)).sum::<f64>() / n;

    let trend = if slope > TREND_THRESHOLD {
        Trend::Improving
    } else if slope < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    };

    EmotionalDrift {
        status: DriftStatus::Success,
        trend,
        slope,
        volatility: variance.sqrt(),
        recommendation: trend.recommendation(),
    }
}

pub fn needs_intervention(slope: f64, current_score: f64) -> bool {
    slope < INTERVENTION_SLOPE || current_score < INTERVENTION_SCORE
}

// ============================================================================
// Companion reaction
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanionAction {
    Sleeping,
    Observing,
    ExcitedZoomies,
    Cuddling,
    ConcernedNuzzle,
    HappyDance,
}

impl CompanionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanionAction::Sleeping => "sleeping",
            CompanionAction::Observing => "observing",
            CompanionAction::ExcitedZoomies => "excited_zoomies",
            CompanionAction::Cuddling => "cuddling",
            CompanionAction::ConcernedNuzzle => "concerned_nuzzle",
            CompanionAction::HappyDance => "happy_dance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedInteraction {
    CheckIn,
    Play,
    Comfort,
}

impl SuggestedInteraction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestedInteraction::CheckIn => "check_in",
            SuggestedInteraction::Play => "play",
            SuggestedInteraction::Comfort => "comfort",
        }
    }
}

/// How the companion responds to the user's mood. Advisory only: the
/// stored vitals are never changed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanionReaction {
    pub action: CompanionAction,
    pub happiness_modifier: i8,
    pub suggested_interaction: SuggestedInteraction,
}

impl CompanionReaction {
    /// Resting state before any check-in.
    pub fn idle() -> Self {
        Self {
            action: CompanionAction::Sleeping,
            happiness_modifier: 0,
            suggested_interaction: SuggestedInteraction::CheckIn,
        }
    }
}

/// A low mood gets support, never a sad companion.
pub fn companion_reaction(trend: Trend, current_level: u8) -> CompanionReaction {
    let (mut action, happiness_modifier, suggested_interaction) = match trend {
        Trend::Improving => (CompanionAction::ExcitedZoomies, 10, SuggestedInteraction::Play),
        Trend::Declining => (CompanionAction::Cuddling, 0, SuggestedInteraction::Comfort),
        Trend::Stable => (CompanionAction::Observing, 0, SuggestedInteraction::CheckIn),
    };

    if current_level <= 2 {
        action = CompanionAction::ConcernedNuzzle;
    } else if current_level >= 4 {
        action = CompanionAction::HappyDance;
    }

    CompanionReaction {
        action,
        happiness_modifier,
        suggested_interaction,
    }
}

// ============================================================================
// Combined view
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub days: u32,
    pub drift: EmotionalDrift,
    pub intervention: bool,
    pub reaction: CompanionReaction,
}

impl UserRecord {
    pub fn insights(&self, today: NaiveDate, days: u32) -> Insights {
        let moods = self.moods_since(today, days);
        let scores: Vec<f64> = moods.iter().map(|entry| mood_score(entry.mood)).collect();
        let drift = detect_drift(&scores);

        let latest = moods.last();
        let current_score = latest.map_or(0.0, |entry| mood_score(entry.mood));
        let reaction = latest.map_or_else(CompanionReaction::idle, |entry| {
            companion_reaction(drift.trend, entry.mood.level())
        });

        Insights {
            days,
            intervention: needs_intervention(drift.slope, current_score),
            drift,
            reaction,
        }
    }
}

impl RecordStore {
    pub fn wrapped(&self, days: u32) -> Option<WrappedSummary> {
        self.load().map(|record| record.wrapped(self.today(), days))
    }

    pub fn insights(&self, days: u32) -> Option<Insights> {
        self.load().map(|record| record.insights(self.today(), days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{onboarded_store, ts};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fewer_than_two_points_is_insufficient() {
        let drift = detect_drift(&[0.5]);
        assert_eq!(drift.status, DriftStatus::InsufficientData);
        assert_eq!(drift.trend, Trend::Stable);
        assert_eq!(drift.slope, 0.0);
        assert_eq!(drift.recommendation, "Maintain your routine.");
    }

    #[test]
    fn declining_series() {
        let drift = detect_drift(&[0.2, 0.1, -0.1, -0.3, -0.4]);
        assert_eq!(drift.status, DriftStatus::Success);
        assert_eq!(drift.trend, Trend::Declining);
        assert!(approx(drift.slope, -0.16));
        assert!(drift.recommendation.starts_with("Consider a grounding exercise"));
        assert!(needs_intervention(drift.slope, -0.4));
    }

    #[test]
    fn flat_series_has_zero_volatility() {
        let drift = detect_drift(&[0.5, 0.5, 0.5]);
        assert_eq!(drift.trend, Trend::Stable);
        assert!(approx(drift.volatility, 0.0));
    }

    #[test]
    fn volatility_is_population_std_dev() {
        let drift = detect_drift(&[-1.0, 1.0]);
        assert_eq!(drift.trend, Trend::Improving);
        assert!(approx(drift.slope, 2.0));
        assert!(approx(drift.volatility, 1.0));
    }

    #[test]
    fn intervention_on_low_current_score() {
        assert!(needs_intervention(0.0, -1.0));
        assert!(!needs_intervention(0.0, -0.5));
        assert!(!needs_intervention(-0.1, 0.0));
    }

    #[test]
    fn reaction_level_overrides_trend_action() {
        let r = companion_reaction(Trend::Improving, 5);
        assert_eq!(r.action, CompanionAction::HappyDance);
        assert_eq!(r.happiness_modifier, 10);
        assert_eq!(r.suggested_interaction, SuggestedInteraction::Play);

        let r = companion_reaction(Trend::Declining, 1);
        assert_eq!(r.action, CompanionAction::ConcernedNuzzle);
        assert_eq!(r.suggested_interaction, SuggestedInteraction::Comfort);

        let r = companion_reaction(Trend::Stable, 3);
        assert_eq!(r.action, CompanionAction::Observing);
        assert_eq!(r.happiness_modifier, 0);
    }

    #[test]
    fn wrapped_defaults_to_calm() {
        let (_store, _clock, record) = onboarded_store(ts(2024, 1, 10, 8, 0, 0));
        let summary = record.wrapped(ts(2024, 1, 10, 8, 0, 0).date_naive(), 30);
        assert_eq!(summary.check_ins, 0);
        assert_eq!(summary.top_mood, Mood::Calm);
        assert_eq!(summary.pet_name, "Mochi");
    }

    #[test]
    fn wrapped_top_mood_ties_keep_first_seen() {
        let (store, clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
        for mood in [Mood::Sad, Mood::Happy, Mood::Happy, Mood::Sad, Mood::Okay] {
            store.record_mood(mood).unwrap();
            clock.advance_days(1);
        }
        store.interact(crate::companion::Interaction::Pet).unwrap();

        let summary = store.wrapped(30).unwrap();
        assert_eq!(summary.check_ins, 5);
        assert_eq!(summary.top_mood, Mood::Sad);
        assert_eq!(summary.mood_counts[0].count, 2);
        assert_eq!(summary.mood_counts[2].mood, Mood::Okay);
        assert_eq!(summary.total_interactions, 1);
    }

    #[test]
    fn insights_without_moods_leave_companion_idle() {
        let (store, _clock, _) = onboarded_store(ts(2024, 1, 1, 8, 0, 0));
        let insights = store.insights(7).unwrap();
        assert_eq!(insights.reaction, CompanionReaction::idle());
        assert_eq!(insights.drift.status, DriftStatus::InsufficientData);
        assert!(!insights.intervention);
    }
}
