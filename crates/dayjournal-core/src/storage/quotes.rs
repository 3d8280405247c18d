//! Daily quote seed loading.
//!
//! The seed file is a JSON array of `{day_of_year, quote, author}`
//! objects. Loading is lenient: entries that do not conform are skipped
//! and missing days fall back to the default quote, so a broken seed
//! file never stops the journal from opening.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Number of seeded days; day-of-year 366 reuses day 365.
pub const QUOTE_DAYS: usize = 365;

const DEFAULT_QUOTE_TEXT: &str = "Keep going.";
const DEFAULT_QUOTE_AUTHOR: &str = "Unknown";

/// A quote shown once per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub quote: String,
    pub author: String,
}

impl DailyQuote {
    /// The quote used when the seed has no entry for a day.
    pub fn fallback() -> Self {
        Self {
            quote: DEFAULT_QUOTE_TEXT.to_string(),
            author: DEFAULT_QUOTE_AUTHOR.to_string(),
        }
    }
}

/// Load the 365-entry quote table from a JSON seed file.
///
/// Always returns exactly [`QUOTE_DAYS`] entries: unreadable files,
/// non-array JSON, malformed entries and unseeded days all degrade to
/// [`DailyQuote::fallback`].
pub fn load_quote_seed(path: &Path) -> Vec<DailyQuote> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return vec![DailyQuote::fallback(); QUOTE_DAYS];
    };
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&raw) else {
        return vec![DailyQuote::fallback(); QUOTE_DAYS];
    };
    let Some(items) = parsed.as_array() else {
        return vec![DailyQuote::fallback(); QUOTE_DAYS];
    };

    let mut by_day: HashMap<usize, DailyQuote> = HashMap::new();
    for item in items {
        let Some(day) = item.get("day_of_year").and_then(|v| v.as_i64()) else {
            continue;
        };
        if day < 1 || day > QUOTE_DAYS as i64 {
            continue;
        }
        let Some(quote) = item.get("quote").and_then(|v| v.as_str()) else {
            continue;
        };
        let Some(author) = item.get("author").and_then(|v| v.as_str()) else {
            continue;
        };
        if quote.trim().is_empty() || author.trim().is_empty() {
            continue;
        }
        by_day.insert(
            day as usize,
            DailyQuote {
                quote: quote.trim().to_string(),
                author: author.trim().to_string(),
            },
        );
    }

    (1..=QUOTE_DAYS)
        .map(|day| by_day.get(&day).cloned().unwrap_or_else(DailyQuote::fallback))
        .collect()
}
