//! Session and onboarding commands.

use super::Context;
use crate::output::{self, print_row};
use anyhow::{Context as _, Result};
use clap::Args;
use emerge_store::{Gate, PetType, Preferences, TimeOfDay};
use serde_json::json;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Start a session. Idempotent.
pub fn login(ctx: &Context) -> Result<()> {
    if ctx.store.is_authenticated() {
        output::print_success("Already logged in", &ctx.format);
        return Ok(());
    }

    ctx.store.login()?;
    let next = if ctx.store.is_onboarding_complete() {
        "Welcome back"
    } else {
        "Logged in. Run 'emerge onboard' to set up your companion"
    };
    output::print_success(next, &ctx.format);
    Ok(())
}

/// End the session. The record is kept.
pub fn logout(ctx: &Context) -> Result<()> {
    if !ctx.store.is_authenticated() {
        output::print_success("Not logged in", &ctx.format);
        return Ok(());
    }

    ctx.store.logout()?;
    output::print_success("Logged out. Your data stays on this device", &ctx.format);
    Ok(())
}

/// Show which of the three gate states applies.
pub async fn status(ctx: &Context) -> Result<()> {
    let gate = ctx.store.gate();
    let analysis = match ctx.analysis_client() {
        Some(client) if client.check_health().await => "reachable",
        Some(_) => "unreachable",
        None => "not configured",
    };

    if ctx.format.is_json() {
        let record = match &gate {
            Gate::Ready(record) => Some(json!({
                "name": record.preferences.name,
                "pet_name": record.pet.name,
                "pet_type": record.pet.kind,
                "check_ins": record.mood_history.len(),
                "journal_entries": record.journal_entries.len(),
                "last_active": record.last_active,
            })),
            _ => None,
        };
        output::print_json(&json!({
            "state": gate.as_str(),
            "store_dir": ctx.paths.store_dir(),
            "analysis": analysis,
            "record": record,
        }));
        return Ok(());
    }

    output::print_heading("Emerge Status");
    print_row("State", gate.as_str());
    print_row("Store", &ctx.paths.store_dir().display().to_string());
    print_row("Analysis", analysis);

    match gate {
        Gate::Ready(record) => {
            print_row("Name", &record.preferences.name);
            print_row(
                "Companion",
                &format!("{} the {}", record.pet.name, record.pet.kind.display_name()),
            );
            print_row("Check-ins", &record.mood_history.len().to_string());
            print_row("Journal entries", &record.journal_entries.len().to_string());
            print_row(
                "Last active",
                &record.last_active.format("%Y-%m-%d %H:%M UTC").to_string(),
            );
        }
        Gate::Onboarding => {
            println!();
            println!("Run 'emerge onboard' to finish setting up.");
        }
        Gate::LoggedOut => {
            println!();
            println!("Run 'emerge login' to start.");
        }
    }
    Ok(())
}

/// Profile and companion chosen at onboarding.
#[derive(Args, Debug)]
pub struct OnboardArgs {
    /// Your display name
    #[arg(long)]
    pub name: String,

    /// Companion species (dog, cat, rabbit, hamster, guinea-pig, ...)
    #[arg(long, default_value = "cat")]
    pub pet_type: PetType,

    /// Companion name, defaults to the species name
    #[arg(long, default_value = "")]
    pub pet_name: String,

    /// Interest (repeatable)
    #[arg(long = "interest")]
    pub interests: Vec<String>,

    /// Favorite artist (repeatable)
    #[arg(long = "artist")]
    pub artists: Vec<String>,

    /// Favorite genre (repeatable)
    #[arg(long = "genre")]
    pub genres: Vec<String>,

    /// When you usually check in (morning, afternoon, evening, night)
    #[arg(long, default_value = "morning")]
    pub time_of_day: TimeOfDay,

    /// Personality answer as question=answer (repeatable)
    #[arg(long = "answer", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,
}

pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected question=answer, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("question id must not be empty".to_string());
    }
    Ok((key.to_string(), value.trim().to_string()))
}

impl OnboardArgs {
    fn preferences(&self) -> Preferences {
        Preferences {
            name: self.name.trim().to_string(),
            favorite_artists: self.artists.clone(),
            favorite_genres: self.genres.clone(),
            interests: self.interests.clone(),
            personality_answers: self.answers.iter().cloned().collect::<BTreeMap<_, _>>(),
            preferred_time_of_day: self.time_of_day,
        }
    }
}

/// Create the record. Requires a session; refuses to overwrite a finished one.
pub fn onboard(ctx: &Context, args: OnboardArgs) -> Result<()> {
    if !ctx.store.is_authenticated() {
        anyhow::bail!("Not logged in. Run 'emerge login'");
    }
    if args.name.trim().is_empty() {
        anyhow::bail!("Name is required");
    }

    let record = ctx
        .store
        .complete_onboarding(args.preferences(), args.pet_type, &args.pet_name)
        .context("Onboarding failed")?;

    if ctx.format.is_json() {
        output::print_json(&record);
    } else {
        output::print_success(
            &format!(
                "Welcome, {}! {} the {} is happy to meet you.",
                record.preferences.name,
                record.pet.name,
                record.pet.kind.display_name()
            ),
            &ctx.format,
        );
    }
    Ok(())
}

/// Delete the record and session flag.
pub fn reset(ctx: &Context, yes: bool) -> Result<()> {
    if !yes {
        if ctx.format.is_json() {
            anyhow::bail!("Refusing to reset without --yes");
        }
        print!("This deletes your moods, journal and companion. Type 'yes' to continue: ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if answer.trim() != "yes" {
            output::print_success("Reset cancelled", &ctx.format);
            return Ok(());
        }
    }

    ctx.store.clear()?;
    output::print_success("All local data deleted", &ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use emerge_store::StoreError;

    fn args(name: &str) -> OnboardArgs {
        OnboardArgs {
            name: name.to_string(),
            pet_type: PetType::Rabbit,
            pet_name: String::new(),
            interests: vec!["hiking".into()],
            artists: Vec::new(),
            genres: Vec::new(),
            time_of_day: TimeOfDay::Morning,
            answers: vec![("q1".into(), "quiet".into())],
        }
    }

    #[test]
    fn parse_answer_splits_on_first_equals() {
        assert_eq!(
            parse_answer("mood=a=b").unwrap(),
            ("mood".to_string(), "a=b".to_string())
        );
        assert!(parse_answer("no-separator").is_err());
        assert!(parse_answer(" =x").is_err());
    }

    #[test]
    fn onboard_requires_login() {
        let ctx = test_support::empty();
        assert!(onboard(&ctx, args("Ari")).is_err());
        assert!(ctx.store.load().is_none());
    }

    #[test]
    fn onboard_then_refuse_second_time() {
        let ctx = test_support::empty();
        login(&ctx).unwrap();
        onboard(&ctx, args("Ari")).unwrap();

        let record = ctx.store.load().unwrap();
        assert_eq!(record.pet.name, "Rabbit");
        assert_eq!(record.preferences.personality_answers["q1"], "quiet");
        assert_eq!(record.preferences.preferred_time_of_day, TimeOfDay::Morning);

        let err = onboard(&ctx, args("Someone else")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::AlreadyOnboarded)
        ));
        assert_eq!(ctx.store.load().unwrap().preferences.name, "Ari");
    }

    #[test]
    fn blank_name_is_rejected() {
        let ctx = test_support::empty();
        login(&ctx).unwrap();
        assert!(onboard(&ctx, args("   ")).is_err());
        assert!(!ctx.store.is_onboarding_complete());
    }

    #[test]
    fn logout_keeps_record_and_reset_clears_it() {
        let ctx = test_support::ready();
        logout(&ctx).unwrap();
        assert!(!ctx.store.is_authenticated());
        assert!(ctx.store.load().is_some());

        login(&ctx).unwrap();
        assert!(ctx.store.gate().is_ready());

        reset(&ctx, true).unwrap();
        assert!(ctx.store.load().is_none());
        assert!(!ctx.store.is_authenticated());
    }
}
