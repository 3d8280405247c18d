//! Persistent journal storage: SQLite database and data paths.

mod database;
mod quotes;

pub use database::{Habit, JournalDb, DAY_START_KEY, MAX_HABITS, QUOTE_DISMISSED_KEY};
pub use quotes::{load_quote_seed, DailyQuote, QUOTE_DAYS};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns the journal data directory.
///
/// `DAYJOURNAL_DATA_DIR` overrides the location outright (used by
/// tests); otherwise this is `~/.config/dayjournal[-dev]/` based on
/// `DAYJOURNAL_ENV`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    if let Ok(custom) = std::env::var("DAYJOURNAL_DATA_DIR") {
        let dir = PathBuf::from(custom);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYJOURNAL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayjournal-dev")
    } else {
        base_dir.join("dayjournal")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
