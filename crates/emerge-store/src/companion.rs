//! Companion state machine.
//!
//! The companion's state is the continuous tuple (happiness, energy, comfort)
//! in [0, 100]³. Interactions move it by a fixed delta table; every result is
//! clamped at the bounds.

use crate::error::{StoreError, StoreResult};
use crate::model::{CompanionState, PetType, DEFAULT_VITAL, VITAL_MAX, VITAL_MIN};
use crate::record::{Applied, RecordStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The closed set of companion interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    Pet,
    Feed,
    Play,
}

/// Signed change applied to each vital.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalDelta {
    pub happiness: i16,
    pub energy: i16,
    pub comfort: i16,
}

impl Interaction {
    pub const ALL: [Interaction; 3] = [Interaction::Pet, Interaction::Feed, Interaction::Play];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interaction::Pet => "pet",
            Interaction::Feed => "feed",
            Interaction::Play => "play",
        }
    }

    pub fn delta(&self) -> VitalDelta {
        match self {
            Interaction::Pet => VitalDelta {
                happiness: 5,
                energy: 0,
                comfort: 10,
            },
            Interaction::Feed => VitalDelta {
                happiness: 5,
                energy: 15,
                comfort: 0,
            },
            Interaction::Play => VitalDelta {
                happiness: 15,
                energy: -5,
                comfort: 0,
            },
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interaction {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| StoreError::UnknownInteraction(s.to_string()))
    }
}

/// Field overwrites that bypass the interaction table.
///
/// The companion kind and interaction counter are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanionUpdate {
    pub name: Option<String>,
    pub happiness: Option<u8>,
    pub energy: Option<u8>,
    pub comfort: Option<u8>,
}

impl CompanionUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// How the companion presents, derived from happiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Happy,
    Neutral,
    Sleepy,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Happy => "happy",
            Disposition::Neutral => "neutral",
            Disposition::Sleepy => "sleepy",
        }
    }
}

fn clamp_vital(value: i16) -> u8 {
    value.clamp(VITAL_MIN as i16, VITAL_MAX as i16) as u8
}

fn shift(value: u8, delta: i16) -> u8 {
    clamp_vital(value as i16 + delta)
}

impl CompanionState {
    /// New companion with default vitals. A blank name falls back to the
    /// kind's display name.
    pub fn new(kind: PetType, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            kind.display_name().to_string()
        } else {
            name
        };

        Self {
            kind,
            name,
            happiness: DEFAULT_VITAL,
            energy: DEFAULT_VITAL,
            comfort: DEFAULT_VITAL,
            last_interaction: now,
            total_interactions: 0,
        }
    }

    /// Apply one interaction. Always counts, even when every vital is
    /// already pinned at a bound.
    pub fn interact(&self, action: Interaction, now: DateTime<Utc>) -> Self {
        let delta = action.delta();
        Self {
            happiness: shift(self.happiness, delta.happiness),
            energy: shift(self.energy, delta.energy),
            comfort: shift(self.comfort, delta.comfort),
            last_interaction: now,
            total_interactions: self.total_interactions.saturating_add(1),
            ..self.clone()
        }
    }

    /// Overwrite fields directly. Refreshes `last_interaction` but never
    /// touches `total_interactions`.
    pub fn apply_update(&self, update: &CompanionUpdate, now: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        if let Some(name) = &update.name {
            next.name = name.clone();
        }
        if let Some(happiness) = update.happiness {
            next.happiness = happiness.min(VITAL_MAX);
        }
        if let Some(energy) = update.energy {
            next.energy = energy.min(VITAL_MAX);
        }
        if let Some(comfort) = update.comfort {
            next.comfort = comfort.min(VITAL_MAX);
        }
        next.last_interaction = now;
        next
    }

    pub fn disposition(&self) -> Disposition {
        match self.happiness {
            70.. => Disposition::Happy,
            40..=69 => Disposition::Neutral,
            _ => Disposition::Sleepy,
        }
    }
}

impl RecordStore {
    /// Run one interaction against the stored companion.
    pub fn interact(&self, action: Interaction) -> StoreResult<Applied<CompanionState>> {
        let applied = self.mutate(|record, now| {
            record.pet = record.pet.interact(action, now);
            Ok(record.pet.clone())
        })?;

        info!(
            action = %action,
            happiness = applied.value.happiness,
            energy = applied.value.energy,
            comfort = applied.value.comfort,
            total = applied.value.total_interactions,
            "Companion interaction"
        );
        Ok(applied)
    }

    /// Overwrite companion fields without running the interaction table.
    pub fn update_pet(&self, update: CompanionUpdate) -> StoreResult<Applied<CompanionState>> {
        let applied = self.mutate(|record, now| {
            record.pet = record.pet.apply_update(&update, now);
            Ok(record.pet.clone())
        })?;

        info!(name = %applied.value.name, "Updated companion");
        Ok(applied)
    }

    pub fn rename_pet(&self, name: impl Into<String>) -> StoreResult<Applied<CompanionState>> {
        self.update_pet(CompanionUpdate::rename(name))
    }
}
