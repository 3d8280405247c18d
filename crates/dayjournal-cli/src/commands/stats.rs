//! Habit statistics commands for CLI.

use clap::Subcommand;
use dayjournal_core::stats::{month_start, week_start, year_start, CompletionRatio};
use dayjournal_core::JournalDb;

use super::common::resolve_day;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Habit completion ratios for the week, month and year so far
    Habits {
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = JournalDb::open()?;

    match action {
        StatsAction::Habits { day } => {
            let day = resolve_day(day)?;
            let habit_count = db.list_habits()?.len() as i64;

            let periods = [
                ("Week", week_start(day)),
                ("Month", month_start(day)),
                ("Year", year_start(day)),
            ];
            for (label, start) in periods {
                let days = (day - start).num_days() + 1;
                let done = db.count_checked_between(start, day)?;
                let ratio = CompletionRatio::new(done, habit_count * days);
                println!("{label}:{:pad$}{ratio}", "", pad = 6 - label.len());
            }
        }
    }

    Ok(())
}
