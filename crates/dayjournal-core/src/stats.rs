//! Habit completion statistics over calendar periods.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monday of the week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// First day of the month containing `day`.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// January 1st of the year containing `day`.
pub fn year_start(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), 1, 1).unwrap_or(day)
}

/// Habit checks done out of the possible total for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionRatio {
    pub done: i64,
    pub possible: i64,
}

impl CompletionRatio {
    pub fn new(done: i64, possible: i64) -> Self {
        Self { done, possible }
    }

    /// Completion percentage; zero when nothing was possible.
    pub fn percent(&self) -> f64 {
        if self.possible <= 0 {
            return 0.0;
        }
        self.done as f64 / self.possible as f64 * 100.0
    }
}

impl fmt::Display for CompletionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.possible <= 0 {
            return write!(f, "0/0 (0%)");
        }
        write!(f, "{}/{} ({:.1}%)", self.done, self.possible, self.percent())
    }
}
