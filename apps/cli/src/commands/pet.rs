//! Companion commands.

use super::Context;
use crate::output::{self, meter, print_row};
use anyhow::Result;
use emerge_store::{CompanionState, Interaction};
use serde_json::json;

fn print_pet(pet: &CompanionState) {
    output::print_heading(&format!("{} the {}", pet.name, pet.kind.display_name()));
    print_row("Happiness", &meter(pet.happiness));
    print_row("Energy", &meter(pet.energy));
    print_row("Comfort", &meter(pet.comfort));
    print_row("Feeling", pet.disposition().as_str());
    print_row("Interactions", &pet.total_interactions.to_string());
    print_row(
        "Last interaction",
        &pet.last_interaction.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
}

fn print_json_pet(pet: &CompanionState) {
    output::print_json(&json!({
        "pet": pet,
        "disposition": pet.disposition(),
    }));
}

pub fn pet_show(ctx: &Context) -> Result<()> {
    let record = ctx.require_ready()?;
    if ctx.format.is_json() {
        print_json_pet(&record.pet);
    } else {
        print_pet(&record.pet);
    }
    Ok(())
}

pub fn pet_interact(ctx: &Context, action: Interaction) -> Result<()> {
    ctx.require_ready()?;
    let pet = ctx.store.interact(action)?.value;

    if ctx.format.is_json() {
        print_json_pet(&pet);
    } else {
        let verb = match action {
            Interaction::Pet => "You pet",
            Interaction::Feed => "You fed",
            Interaction::Play => "You played with",
        };
        output::print_success(&format!("{verb} {}", pet.name), &ctx.format);
        print_pet(&pet);
    }
    Ok(())
}

pub fn pet_rename(ctx: &Context, name: String) -> Result<()> {
    ctx.require_ready()?;
    if name.trim().is_empty() {
        anyhow::bail!("Name must not be empty");
    }

    let pet = ctx.store.rename_pet(name.trim())?.value;
    if ctx.format.is_json() {
        print_json_pet(&pet);
    } else {
        output::print_success(&format!("Your companion is now called {}", pet.name), &ctx.format);
    }
    Ok(())
}
