//! Profile commands.

use super::session::parse_answer;
use super::Context;
use crate::output::{self, print_row};
use anyhow::Result;
use clap::Args;
use emerge_store::{Preferences, TimeOfDay};

/// Fields to change. With no flags the current profile is printed.
#[derive(Args, Debug, Default)]
pub struct PreferencesArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// Replace interests (repeatable)
    #[arg(long = "interest")]
    pub interests: Vec<String>,

    /// Replace favorite artists (repeatable)
    #[arg(long = "artist")]
    pub artists: Vec<String>,

    /// Replace favorite genres (repeatable)
    #[arg(long = "genre")]
    pub genres: Vec<String>,

    #[arg(long)]
    pub time_of_day: Option<TimeOfDay>,

    /// Set a personality answer as question=answer (repeatable)
    #[arg(long = "answer", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,
}

impl PreferencesArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.interests.is_empty()
            && self.artists.is_empty()
            && self.genres.is_empty()
            && self.time_of_day.is_none()
            && self.answers.is_empty()
    }

    /// Overlay the given flags onto `current`. Answers merge, lists replace.
    fn apply(self, mut current: Preferences) -> Result<Preferences> {
        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("Name must not be empty");
            }
            current.name = name.to_string();
        }
        if !self.interests.is_empty() {
            current.interests = self.interests;
        }
        if !self.artists.is_empty() {
            current.favorite_artists = self.artists;
        }
        if !self.genres.is_empty() {
            current.favorite_genres = self.genres;
        }
        if let Some(time) = self.time_of_day {
            current.preferred_time_of_day = time;
        }
        current.personality_answers.extend(self.answers);
        Ok(current)
    }
}

fn print_preferences(prefs: &Preferences) {
    output::print_heading("Profile");
    print_row("Name", &prefs.name);
    print_row("Check-in time", prefs.preferred_time_of_day.as_str());
    print_row("Interests", &prefs.interests.join(", "));
    print_row("Artists", &prefs.favorite_artists.join(", "));
    print_row("Genres", &prefs.favorite_genres.join(", "));
    for (question, answer) in &prefs.personality_answers {
        print_row(question, answer);
    }
}

pub fn preferences(ctx: &Context, args: PreferencesArgs) -> Result<()> {
    let record = ctx.require_ready()?;

    let prefs = if args.is_empty() {
        record.preferences
    } else {
        let updated = args.apply(record.preferences)?;
        ctx.store.update_preferences(updated)?.preferences
    };

    if ctx.format.is_json() {
        output::print_json(&prefs);
    } else {
        print_preferences(&prefs);
    }
    Ok(())
}
