use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "habitloop", version, about = "Habitloop CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's record: status and end-of-day commit
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Track a metric (steps, water, screen, sleep)
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Daily goal management
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Screen-free focus timer
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Daily challenge
    Challenge {
        #[command(subcommand)]
        action: commands::challenge::ChallengeAction,
    },
    /// Team leaderboard
    Board {
        #[command(subcommand)]
        action: commands::board::BoardAction,
    },
    /// Badges, streak and history
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Grant points manually
    Award {
        /// Points to grant
        points: u32,
        /// Informational reason, not persisted
        #[arg(long, default_value = "manual")]
        reason: String,
    },
    /// Print a random screen-break idea
    Idea,
    /// Free-form notes
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Day { action } => commands::day::run(action),
        Commands::Track { action } => commands::track::run(action),
        Commands::Goals { action } => commands::goals::run(action),
        Commands::Focus { action } => commands::focus::run(action),
        Commands::Challenge { action } => commands::challenge::run(action),
        Commands::Board { action } => commands::board::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Award { points, reason } => commands::award::run(points, &reason),
        Commands::Idea => commands::idea::run(),
        Commands::Notes { action } => commands::notes::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
