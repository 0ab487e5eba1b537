//! Emerge CLI - mood check-ins, journal and companion from the terminal.

mod commands;
mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use emerge_store::{Interaction, Mood, StickerMood};
use std::path::PathBuf;

/// Emerge - a quiet place to check in with yourself.
#[derive(Parser)]
#[command(name = "emerge")]
#[command(about = "Track moods, keep a journal and look after your companion")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error); overrides config
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory holding the user record; overrides config
    #[arg(long, env = "EMERGE_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a session
    Login,

    /// End the session (your data stays on this device)
    Logout,

    /// Show session and onboarding status
    Status,

    /// Set up your profile and companion
    Onboard(commands::OnboardArgs),

    /// Mood check-ins
    Mood {
        #[command(subcommand)]
        command: MoodCommands,
    },

    /// Journal entries
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },

    /// Your companion
    Pet {
        #[command(subcommand)]
        command: PetCommands,
    },

    /// Show or change your profile
    Preferences(commands::PreferencesArgs),

    /// Recap of a period
    Wrapped {
        /// Number of days to look back
        #[arg(short, long, default_value = "30")]
        days: u32,
    },

    /// Emotional trend and companion reaction
    Insights {
        /// Number of days to look back
        #[arg(short, long, default_value = "7")]
        days: u32,
    },

    /// Delete all local data and end the session
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MoodCommands {
    /// Record how you feel (replaces any check-in for the same day)
    Log {
        mood: Mood,
        /// Date to record for (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Short note sent for analysis, never stored
        #[arg(long)]
        note: Option<String>,
        /// Longer reflection sent for analysis, never stored
        #[arg(long)]
        reflection: Option<String>,
    },
    /// Show today's check-in
    Today,
    /// Check-ins from the last N days, oldest first
    History {
        #[arg(short, long, default_value = "7")]
        days: u32,
    },
    /// List every mood you can pick
    Catalogue,
}

#[derive(Subcommand)]
enum JournalCommands {
    /// Write an entry
    Add {
        content: String,
        /// Sticker to attach (repeatable)
        #[arg(short, long = "sticker")]
        stickers: Vec<StickerMood>,
    },
    /// List entries, newest first
    List {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
enum PetCommands {
    /// Show your companion
    Show,
    /// Pet, feed or play
    Interact { action: Interaction },
    /// Give your companion a new name
    Rename { name: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let format = cli.format;

    let ctx = match commands::Context::open(cli.data_dir, cli.log_level, format) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::print_error(&format!("{e:#}"), &format);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Login => commands::login(&ctx),
        Commands::Logout => commands::logout(&ctx),
        Commands::Status => commands::status(&ctx).await,
        Commands::Onboard(args) => commands::onboard(&ctx, args),
        Commands::Mood { command } => match command {
            MoodCommands::Log {
                mood,
                date,
                note,
                reflection,
            } => commands::mood_log(&ctx, mood, date, note, reflection).await,
            MoodCommands::Today => commands::mood_today(&ctx),
            MoodCommands::History { days } => commands::mood_history(&ctx, days),
            MoodCommands::Catalogue => commands::mood_catalogue(&ctx),
        },
        Commands::Journal { command } => match command {
            JournalCommands::Add { content, stickers } => {
                commands::journal_add(&ctx, content, stickers)
            }
            JournalCommands::List { limit } => commands::journal_list(&ctx, limit),
        },
        Commands::Pet { command } => match command {
            PetCommands::Show => commands::pet_show(&ctx),
            PetCommands::Interact { action } => commands::pet_interact(&ctx, action),
            PetCommands::Rename { name } => commands::pet_rename(&ctx, name),
        },
        Commands::Preferences(args) => commands::preferences(&ctx, args),
        Commands::Wrapped { days } => commands::wrapped(&ctx, days),
        Commands::Insights { days } => commands::insights(&ctx, days),
        Commands::Reset { yes } => commands::reset(&ctx, yes),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        output::print_error(&format!("{e:#}"), &format);
        std::process::exit(1);
    }
}
