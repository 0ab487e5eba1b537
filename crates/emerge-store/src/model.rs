//! Entity model persisted under the user-data key.
//!
//! Field names follow the camelCase JSON layout the store has always
//! written, so records produced by earlier builds keep loading.

use crate::error::StoreError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Lowest value a companion vital can take.
pub const VITAL_MIN: u8 = 0;
/// Highest value a companion vital can take.
pub const VITAL_MAX: u8 = 100;
/// Starting value for every vital of a new companion.
pub const DEFAULT_VITAL: u8 = 70;

// ============================================================================
// Closed enums
// ============================================================================

/// Kind of virtual companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PetType {
    #[default]
    Dog,
    Cat,
    Rabbit,
    Hamster,
    GuineaPig,
    Bird,
    Fish,
    Turtle,
    Ferret,
    Hedgehog,
    Lion,
    Cow,
    Hen,
    Snake,
}

impl PetType {
    pub const ALL: [PetType; 14] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Rabbit,
        PetType::Hamster,
        PetType::GuineaPig,
        PetType::Bird,
        PetType::Fish,
        PetType::Turtle,
        PetType::Ferret,
        PetType::Hedgehog,
        PetType::Lion,
        PetType::Cow,
        PetType::Hen,
        PetType::Snake,
    ];

    /// Wire name, as stored in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Rabbit => "rabbit",
            PetType::Hamster => "hamster",
            PetType::GuineaPig => "guinea-pig",
            PetType::Bird => "bird",
            PetType::Fish => "fish",
            PetType::Turtle => "turtle",
            PetType::Ferret => "ferret",
            PetType::Hedgehog => "hedgehog",
            PetType::Lion => "lion",
            PetType::Cow => "cow",
            PetType::Hen => "hen",
            PetType::Snake => "snake",
        }
    }

    /// Human-readable name, also used when the user leaves the pet unnamed.
    pub fn display_name(&self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
            PetType::Rabbit => "Rabbit",
            PetType::Hamster => "Hamster",
            PetType::GuineaPig => "Guinea Pig",
            PetType::Bird => "Bird",
            PetType::Fish => "Fish",
            PetType::Turtle => "Turtle",
            PetType::Ferret => "Ferret",
            PetType::Hedgehog => "Hedgehog",
            PetType::Lion => "Lion",
            PetType::Cow => "Cow",
            PetType::Hen => "Hen",
            PetType::Snake => "Snake",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| StoreError::UnknownPetType(s.to_string()))
    }
}

/// Grouping of moods shown together in the mood picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    Positive,
    Heavy,
    Between,
    Uplifted,
    Safe,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::Positive,
        MoodCategory::Heavy,
        MoodCategory::Between,
        MoodCategory::Uplifted,
        MoodCategory::Safe,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MoodCategory::Positive => "Positive / Light",
            MoodCategory::Heavy => "Low / Heavy",
            MoodCategory::Between => "In-Between",
            MoodCategory::Uplifted => "Uplifted",
            MoodCategory::Safe => "Not Sure",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodCategory::Positive => "☀️",
            MoodCategory::Heavy => "🌧️",
            MoodCategory::Between => "🌤️",
            MoodCategory::Uplifted => "🔥",
            MoodCategory::Safe => "🛡️",
        }
    }

    /// Moods in this category, in picker order.
    pub fn moods(&self) -> Vec<Mood> {
        Mood::ALL
            .into_iter()
            .filter(|mood| mood.category() == *self)
            .collect()
    }
}

/// A daily mood check-in value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    // Positive / light
    Happy,
    Calm,
    Peaceful,
    Content,
    Energetic,
    Motivated,
    // Heavy / low
    Tired,
    Drained,
    Low,
    Overwhelmed,
    Anxious,
    Sad,
    // In-between
    Okay,
    Meh,
    Confused,
    Neutral,
    Thoughtful,
    // Uplifted
    Confident,
    Excited,
    Hopeful,
    Proud,
    Loved,
    // Safe default
    Unsure,
}

impl Mood {
    pub const ALL: [Mood; 23] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Peaceful,
        Mood::Content,
        Mood::Energetic,
        Mood::Motivated,
        Mood::Tired,
        Mood::Drained,
        Mood::Low,
        Mood::Overwhelmed,
        Mood::Anxious,
        Mood::Sad,
        Mood::Okay,
        Mood::Meh,
        Mood::Confused,
        Mood::Neutral,
        Mood::Thoughtful,
        Mood::Confident,
        Mood::Excited,
        Mood::Hopeful,
        Mood::Proud,
        Mood::Loved,
        Mood::Unsure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Peaceful => "peaceful",
            Mood::Content => "content",
            Mood::Energetic => "energetic",
            Mood::Motivated => "motivated",
            Mood::Tired => "tired",
            Mood::Drained => "drained",
            Mood::Low => "low",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Okay => "okay",
            Mood::Meh => "meh",
            Mood::Confused => "confused",
            Mood::Neutral => "neutral",
            Mood::Thoughtful => "thoughtful",
            Mood::Confident => "confident",
            Mood::Excited => "excited",
            Mood::Hopeful => "hopeful",
            Mood::Proud => "proud",
            Mood::Loved => "loved",
            Mood::Unsure => "unsure",
        }
    }

    pub fn category(&self) -> MoodCategory {
        match self {
            Mood::Happy
            | Mood::Calm
            | Mood::Peaceful
            | Mood::Content
            | Mood::Energetic
            | Mood::Motivated => MoodCategory::Positive,
            Mood::Tired
            | Mood::Drained
            | Mood::Low
            | Mood::Overwhelmed
            | Mood::Anxious
            | Mood::Sad => MoodCategory::Heavy,
            Mood::Okay | Mood::Meh | Mood::Confused | Mood::Neutral | Mood::Thoughtful => {
                MoodCategory::Between
            }
            Mood::Confident | Mood::Excited | Mood::Hopeful | Mood::Proud | Mood::Loved => {
                MoodCategory::Uplifted
            }
            Mood::Unsure => MoodCategory::Safe,
        }
    }

    /// Coarse 1..=5 level (1 = struggling, 5 = great) used by trend analysis.
    pub fn level(&self) -> u8 {
        match self.category() {
            MoodCategory::Heavy => 1,
            MoodCategory::Between | MoodCategory::Safe => 3,
            MoodCategory::Positive => 4,
            MoodCategory::Uplifted => 5,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| StoreError::UnknownMood(s.to_string()))
    }
}

/// Sticker attached to a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerMood {
    Happy,
    Sad,
    Angry,
    Calm,
    Anxious,
    Excited,
    Tired,
    Loved,
    Lonely,
    Motivated,
}

impl StickerMood {
    pub const ALL: [StickerMood; 10] = [
        StickerMood::Happy,
        StickerMood::Sad,
        StickerMood::Angry,
        StickerMood::Calm,
        StickerMood::Anxious,
        StickerMood::Excited,
        StickerMood::Tired,
        StickerMood::Loved,
        StickerMood::Lonely,
        StickerMood::Motivated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StickerMood::Happy => "happy",
            StickerMood::Sad => "sad",
            StickerMood::Angry => "angry",
            StickerMood::Calm => "calm",
            StickerMood::Anxious => "anxious",
            StickerMood::Excited => "excited",
            StickerMood::Tired => "tired",
            StickerMood::Loved => "loved",
            StickerMood::Lonely => "lonely",
            StickerMood::Motivated => "motivated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StickerMood::Happy => "Happy",
            StickerMood::Sad => "Sad",
            StickerMood::Angry => "Angry",
            StickerMood::Calm => "Calm",
            StickerMood::Anxious => "Anxious",
            StickerMood::Excited => "Excited",
            StickerMood::Tired => "Tired",
            StickerMood::Loved => "Loved",
            StickerMood::Lonely => "Lonely",
            StickerMood::Motivated => "Motivated",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            StickerMood::Happy => "😊",
            StickerMood::Sad => "😔",
            StickerMood::Angry => "😡",
            StickerMood::Calm => "😌",
            StickerMood::Anxious => "😟",
            StickerMood::Excited => "🤩",
            StickerMood::Tired => "😴",
            StickerMood::Loved => "💕",
            StickerMood::Lonely => "🥺",
            StickerMood::Motivated => "💪",
        }
    }
}

impl fmt::Display for StickerMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StickerMood {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sticker| sticker.as_str() == s)
            .ok_or_else(|| StoreError::UnknownSticker(s.to_string()))
    }
}

/// Part of the day the user prefers to check in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|time| time.as_str() == s)
            .ok_or_else(|| StoreError::UnknownTimeOfDay(s.to_string()))
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Profile collected during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Display name
    pub name: String,
    #[serde(default)]
    pub favorite_artists: Vec<String>,
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free-form answers keyed by question id
    #[serde(default)]
    pub personality_answers: BTreeMap<String, String>,
    #[serde(default)]
    pub preferred_time_of_day: TimeOfDay,
}

/// The virtual companion embedded in the user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionState {
    #[serde(rename = "type")]
    pub kind: PetType,
    pub name: String,
    #[serde(deserialize_with = "deserialize_vital")]
    pub happiness: u8,
    #[serde(deserialize_with = "deserialize_vital")]
    pub energy: u8,
    #[serde(deserialize_with = "deserialize_vital")]
    pub comfort: u8,
    pub last_interaction: DateTime<Utc>,
    #[serde(default)]
    pub total_interactions: u64,
}

/// Out-of-range vitals in stored JSON are clamped rather than rejected.
fn deserialize_vital<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(VITAL_MIN as i64, VITAL_MAX as i64) as u8)
}

/// One mood check-in. At most one exists per calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: Mood,
    pub timestamp: DateTime<Utc>,
}

/// One free-text journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    #[serde(default)]
    pub stickers: Vec<StickerMood>,
    pub timestamp: DateTime<Utc>,
}

/// Root aggregate stored under the user-data key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub preferences: Preferences,
    pub pet: CompanionState,
    #[serde(default)]
    pub mood_history: Vec<MoodEntry>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default)]
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}
