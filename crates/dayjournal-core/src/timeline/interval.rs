//! Interval classification for the day timeline.
//!
//! Splits one day's tasks into fixed intervals (explicit start time plus
//! a positive clipped duration) and unscheduled tasks eligible for
//! automatic placement.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A concrete time range on the day axis occupied by one task.
///
/// Invariant: `0 <= start < end <= 1440`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
    pub task: Task,
    /// True when the packer chose the slot instead of the user.
    pub auto_placed: bool,
}

impl Interval {
    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// Check if this interval overlaps with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Result of splitting a day's tasks by schedulability.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedTasks {
    /// Fixed intervals sorted by start, original task order kept on ties.
    pub fixed: Vec<Interval>,
    /// Tasks without a usable start time or duration, input order kept.
    pub unscheduled: Vec<Task>,
}

/// Split tasks into fixed intervals and unscheduled tasks.
///
/// A task becomes a fixed interval only when its estimate is positive,
/// its start time parses, and clipping to `day_end` leaves a non-empty
/// range. Everything else stays eligible for automatic placement; a bad
/// start time is never an error.
pub fn classify_tasks(tasks: &[Task], day_end: i64) -> ClassifiedTasks {
    let mut classified = ClassifiedTasks::default();

    for task in tasks {
        if task.estimated_hours <= 0.0 {
            classified.unscheduled.push(task.clone());
            continue;
        }
        let Some(start) = task.start_minutes() else {
            classified.unscheduled.push(task.clone());
            continue;
        };
        // Saturating: estimates near i64::MAX minutes must clip to the
        // day end, not overflow the addition.
        let end = day_end.min(start.saturating_add(task.estimated_minutes()));
        if end <= start {
            classified.unscheduled.push(task.clone());
            continue;
        }
        classified.fixed.push(Interval {
            start,
            end,
            task: task.clone(),
            auto_placed: false,
        });
    }

    // Stable sort keeps original task order on equal starts.
    classified.fixed.sort_by_key(|interval| interval.start);
    classified
}
