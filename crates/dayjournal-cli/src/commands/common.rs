//! Shared helpers for CLI commands.

use chrono::{Local, NaiveDate};

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn resolve_day(day: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match day {
        Some(text) => {
            let parsed = text
                .trim()
                .parse::<NaiveDate>()
                .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", text.trim()))?;
            Ok(parsed)
        }
        None => Ok(Local::now().date_naive()),
    }
}
