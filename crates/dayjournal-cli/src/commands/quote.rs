//! Daily quote commands for CLI.

use chrono::Local;
use clap::Subcommand;
use dayjournal_core::storage::QUOTE_DISMISSED_KEY;
use dayjournal_core::JournalDb;

use super::common::resolve_day;

#[derive(Subcommand)]
pub enum QuoteAction {
    /// Show the quote of the day
    Show {
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        day: Option<String>,
        /// Show even if dismissed for today
        #[arg(long)]
        force: bool,
    },
    /// Hide today's quote until tomorrow
    Dismiss,
}

pub fn run(action: QuoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = JournalDb::open()?;

    match action {
        QuoteAction::Show { day, force } => {
            let day = resolve_day(day)?;
            let today = Local::now().date_naive();
            let dismissed = db.get_setting(QUOTE_DISMISSED_KEY, "")?;
            if !force && day == today && dismissed == today.to_string() {
                println!("Quote dismissed for today.");
                return Ok(());
            }
            let quote = db.quote_for_date(day)?;
            println!("\"{}\"", quote.quote);
            println!("  - {}", quote.author);
        }
        QuoteAction::Dismiss => {
            let today = Local::now().date_naive();
            db.set_setting(QUOTE_DISMISSED_KEY, &today.to_string())?;
            println!("Quote dismissed for {today}.");
        }
    }

    Ok(())
}
