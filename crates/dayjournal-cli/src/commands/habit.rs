//! Habit tracking commands for CLI.

use clap::Subcommand;
use dayjournal_core::JournalDb;

use super::common::resolve_day;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a habit
    Add {
        /// Habit name
        name: String,
    },
    /// List habits with today's check state
    List {
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
    },
    /// Check a habit for a day
    Check {
        /// Habit ID
        id: i64,
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
    },
    /// Clear a habit check for a day
    Uncheck {
        /// Habit ID
        id: i64,
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = JournalDb::open()?;

    match action {
        HabitAction::Add { name } => {
            let id = db.add_habit(&name)?;
            println!("Added habit {id}: {}", name.trim());
        }
        HabitAction::List { day } => {
            let day = resolve_day(day)?;
            let habits = db.list_habits()?;
            if habits.is_empty() {
                println!("No habits defined.");
                return Ok(());
            }
            let checked = db.checked_habits(day)?;
            for habit in &habits {
                let mark = if checked.contains(&habit.id) { "x" } else { " " };
                println!("[{mark}] #{} {}", habit.id, habit.name);
            }
        }
        HabitAction::Check { id, day } => {
            let day = resolve_day(day)?;
            db.set_habit_check(day, id, true)?;
            println!("Checked habit {id} for {day}.");
        }
        HabitAction::Uncheck { id, day } => {
            let day = resolve_day(day)?;
            db.set_habit_check(day, id, false)?;
            println!("Unchecked habit {id} for {day}.");
        }
    }

    Ok(())
}
