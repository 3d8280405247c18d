//! Journal task types and category ranking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clock;
use crate::error::ValidationError;

/// Category of a journal task.
///
/// Variant order is the packing priority: when the scheduler places
/// unscheduled tasks automatically, lower-ranked categories go first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Focus,
    Main,
    Small,
    Pleasure,
    Reserved,
}

impl TaskCategory {
    /// All categories in rank order.
    pub const ALL: [TaskCategory; 5] = [
        Self::Focus,
        Self::Main,
        Self::Small,
        Self::Pleasure,
        Self::Reserved,
    ];

    /// Rank given to a stored category name the enum does not know.
    /// Unknown names sort after every known category.
    pub const UNKNOWN_RANK: u8 = 5;

    /// Packing priority rank (0 = highest).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Rank for a raw category name, with the explicit unknown fallback.
    pub fn rank_of(name: &str) -> u8 {
        name.parse::<TaskCategory>()
            .map(|category| category.rank())
            .unwrap_or(Self::UNKNOWN_RANK)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Main => "main",
            Self::Small => "small",
            Self::Pleasure => "pleasure",
            Self::Reserved => "reserved",
        }
    }

    /// Human-readable group label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus of the day",
            Self::Main => "Main tasks",
            Self::Small => "Small tasks",
            Self::Pleasure => "Pleasures",
            Self::Reserved => "Reserved time slot",
        }
    }

    /// Maximum number of tasks allowed per day, if limited.
    ///
    /// Enforced by storage admission control, never by the scheduler.
    pub fn daily_limit(&self) -> Option<u32> {
        match self {
            Self::Focus => Some(1),
            Self::Main => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "focus" => Ok(Self::Focus),
            "main" => Ok(Self::Main),
            "small" => Ok(Self::Small),
            "pleasure" => Ok(Self::Pleasure),
            "reserved" => Ok(Self::Reserved),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// A single journal task for one day.
///
/// Tasks arrive from storage already validated; the scheduler reads them
/// as an immutable snapshot and never mutates them. `is_done` is
/// display-only and plays no part in scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub day: NaiveDate,
    pub category: TaskCategory,
    pub title: String,
    /// Estimated length in hours, non-negative.
    pub estimated_hours: f64,
    /// Explicit `"HH:MM"` start, if the user pinned one.
    pub start_time: Option<String>,
    pub spent_hours: f64,
    #[serde(default)]
    pub is_done: bool,
}

impl Task {
    /// Estimated duration in whole minutes.
    pub fn estimated_minutes(&self) -> i64 {
        (self.estimated_hours * 60.0).round() as i64
    }

    /// Parsed start time in minutes since midnight, if present and valid.
    pub fn start_minutes(&self) -> Option<i64> {
        let raw = self.start_time.as_deref()?;
        clock::parse_hhmm(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(category: TaskCategory, start_time: Option<&str>, estimated_hours: f64) -> Task {
        Task {
            id: 1,
            day: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            category,
            title: "Test task".to_string(),
            estimated_hours,
            start_time: start_time.map(str::to_string),
            spent_hours: 0.0,
            is_done: false,
        }
    }

    #[test]
    fn category_rank_order() {
        let ranks: Vec<u8> = TaskCategory::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn unknown_category_ranks_last() {
        assert_eq!(TaskCategory::rank_of("focus"), 0);
        assert_eq!(TaskCategory::rank_of("errand"), TaskCategory::UNKNOWN_RANK);
        assert!(TaskCategory::rank_of("errand") > TaskCategory::Reserved.rank());
    }

    #[test]
    fn category_parse_round_trip() {
        for category in TaskCategory::ALL {
            assert_eq!(category.as_str().parse::<TaskCategory>(), Ok(category));
        }
        assert_eq!(" Main ".parse::<TaskCategory>(), Ok(TaskCategory::Main));
        assert!("weekly".parse::<TaskCategory>().is_err());
    }

    #[test]
    fn daily_limits() {
        assert_eq!(TaskCategory::Focus.daily_limit(), Some(1));
        assert_eq!(TaskCategory::Main.daily_limit(), Some(2));
        assert_eq!(TaskCategory::Small.daily_limit(), None);
        assert_eq!(TaskCategory::Pleasure.daily_limit(), None);
        assert_eq!(TaskCategory::Reserved.daily_limit(), None);
    }

    #[test]
    fn estimated_minutes_rounds() {
        assert_eq!(make_task(TaskCategory::Small, None, 1.0).estimated_minutes(), 60);
        assert_eq!(make_task(TaskCategory::Small, None, 0.5).estimated_minutes(), 30);
        assert_eq!(make_task(TaskCategory::Small, None, 0.504).estimated_minutes(), 30);
    }

    #[test]
    fn start_minutes_tolerates_bad_text() {
        assert_eq!(make_task(TaskCategory::Small, Some("10:00"), 1.0).start_minutes(), Some(600));
        assert_eq!(make_task(TaskCategory::Small, Some("soon"), 1.0).start_minutes(), None);
        assert_eq!(make_task(TaskCategory::Small, None, 1.0).start_minutes(), None);
    }
}
