//! Task management commands for CLI.

use clap::Subcommand;
use dayjournal_core::clock::parse_hhmm;
use dayjournal_core::{JournalDb, TaskCategory};

use super::common::resolve_day;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Category: focus, main, small, pleasure or reserved
        #[arg(long, default_value = "small")]
        category: String,
        /// Estimated duration in hours
        #[arg(long, default_value = "1")]
        hours: f64,
        /// Fixed start time as HH:MM
        #[arg(long)]
        start: Option<String>,
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
    },
    /// List tasks for a day
    List {
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a task
    Edit {
        /// Task ID
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New estimated hours
        #[arg(long)]
        hours: Option<f64>,
        /// New start time as HH:MM; pass an empty string to unpin
        #[arg(long)]
        start: Option<String>,
        /// Hours actually spent
        #[arg(long)]
        spent: Option<f64>,
    },
    /// Mark a task done or not done
    Done {
        /// Task ID
        id: i64,
        /// Clear the done flag instead of setting it
        #[arg(long)]
        undo: bool,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },
}

fn validate_start(start: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !start.trim().is_empty() {
        parse_hhmm(start)?;
    }
    Ok(())
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = JournalDb::open()?;

    match action {
        TaskAction::Add {
            title,
            category,
            hours,
            start,
            day,
        } => {
            let day = resolve_day(day)?;
            let category: TaskCategory = category.parse()?;
            if let Some(start) = &start {
                validate_start(start)?;
            }
            let id = db.add_task(day, category, &title, hours, start.as_deref())?;
            println!("Added task {id}: {}", title.trim());
        }
        TaskAction::List { day, json } => {
            let day = resolve_day(day)?;
            let tasks = db.list_tasks(day)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks for {day}.");
            } else {
                for task in &tasks {
                    let done = if task.is_done { "x" } else { " " };
                    let start = task.start_time.as_deref().unwrap_or("--:--");
                    println!(
                        "[{done}] #{id} {start} {category:>8} {hours:>4.1}h  {title}",
                        id = task.id,
                        category = task.category,
                        hours = task.estimated_hours,
                        title = task.title,
                    );
                }
            }
        }
        TaskAction::Edit {
            id,
            title,
            category,
            hours,
            start,
            spent,
        } => {
            let mut task = db
                .get_task(id)?
                .ok_or_else(|| format!("task {id} not found"))?;
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(category) = category {
                task.category = category.parse()?;
            }
            if let Some(hours) = hours {
                task.estimated_hours = hours;
            }
            if let Some(start) = start {
                validate_start(&start)?;
                task.start_time = (!start.trim().is_empty()).then_some(start);
            }
            if let Some(spent) = spent {
                task.spent_hours = spent;
            }
            db.update_task(&task)?;
            println!("Updated task {id}.");
        }
        TaskAction::Done { id, undo } => {
            let mut task = db
                .get_task(id)?
                .ok_or_else(|| format!("task {id} not found"))?;
            task.is_done = !undo;
            db.update_task(&task)?;
            println!(
                "Task {id} marked {}.",
                if undo { "not done" } else { "done" }
            );
        }
        TaskAction::Delete { id } => {
            db.delete_task(id)?;
            println!("Deleted task {id}.");
        }
    }

    Ok(())
}
