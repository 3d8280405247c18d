use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayjournal", version, about = "Day Journal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Habit tracking
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Day timeline
    Timeline {
        #[command(subcommand)]
        action: commands::timeline::TimelineAction,
    },
    /// Settings management
    Setting {
        #[command(subcommand)]
        action: commands::setting::SettingAction,
    },
    /// Daily quote
    Quote {
        #[command(subcommand)]
        action: commands::quote::QuoteAction,
    },
    /// Habit statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Timeline { action } => commands::timeline::run(action),
        Commands::Setting { action } => commands::setting::run(action),
        Commands::Quote { action } => commands::quote::run(action),
        Commands::Stats { action } => commands::stats::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
