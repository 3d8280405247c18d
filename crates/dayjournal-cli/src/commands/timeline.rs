//! Day timeline commands for CLI.

use clap::Subcommand;
use dayjournal_core::clock::format_hhmm;
use dayjournal_core::timeline::Block;
use dayjournal_core::{DayScheduler, DayTimeline, JournalDb};

use super::common::resolve_day;

#[derive(Subcommand)]
pub enum TimelineAction {
    /// Show the assembled timeline for a day
    Show {
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
        /// Override the configured day start, as HH:MM
        #[arg(long)]
        day_start: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn render(timeline: &DayTimeline) {
    // Markers come out of assembly in block order, so a single forward
    // pass pairs each one with the colliding block it precedes.
    let mut overlaps = timeline.overlaps.iter().peekable();

    for block in &timeline.blocks {
        if let Some(marker) = overlaps.peek() {
            if !block.is_empty() && block.start() == marker.minute {
                println!("!! overlap detected near {}", format_hhmm(marker.minute));
                overlaps.next();
            }
        }
        let span = format!(
            "{} - {}",
            format_hhmm(block.start()),
            format_hhmm(block.end())
        );
        match block {
            Block::Empty { .. } => println!("{span}  (free)"),
            Block::Task {
                task, auto_placed, ..
            } => {
                let done = if task.is_done { "[DONE] " } else { "" };
                let auto = if *auto_placed { " (auto)" } else { "" };
                println!("{span}  {done}{}{auto}", task.title);
            }
        }
    }

    if timeline.unplaced > 0 {
        println!(
            "{} task(s) could not be placed on timeline.",
            timeline.unplaced
        );
    }
}

pub fn run(action: TimelineAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = JournalDb::open()?;

    match action {
        TimelineAction::Show {
            day,
            day_start,
            json,
        } => {
            let day = resolve_day(day)?;
            let day_start = match day_start {
                Some(text) => text,
                None => db.day_start()?,
            };
            let tasks = db.list_tasks(day)?;
            let timeline = DayScheduler::with_day_start(&day_start).schedule(&tasks);

            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                println!("Timeline for {day}:");
                render(&timeline);
            }
        }
    }

    Ok(())
}
