//! Day scheduler: pure recompute-from-scratch timeline generation.
//!
//! Given one day's tasks and a day-start boundary, produces a gapless
//! ordered block sequence covering `[day_start, 24:00]`:
//! - Tasks with an explicit start time and positive duration become
//!   fixed blocks, never moved or resized
//! - Remaining tasks are packed first-fit into free gaps in category
//!   priority order
//! - Free time becomes empty blocks; colliding fixed blocks get an
//!   advisory overlap marker; unplaceable tasks are counted
//!
//! Scheduling never fails: bad configuration and bad task data degrade
//! to defaults or advisory output.

use crate::clock::{self, DAY_END_MINUTES};
use crate::task::Task;
use crate::timeline::{assemble, classify_tasks, DayTimeline, Packer};

/// Scheduler for a single day's timeline.
///
/// Stateless between calls: every `schedule` pass builds and discards
/// its own occupied set, so one scheduler value can be reused or shared
/// freely. The caller must hand in a stable snapshot of the task list;
/// the timeline is recomputed from scratch whenever tasks or the
/// day-start change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayScheduler {
    day_start: i64,
}

impl DayScheduler {
    /// Create a scheduler with the default 09:00 day start.
    pub fn new() -> Self {
        Self {
            day_start: clock::DEFAULT_DAY_START_MINUTES,
        }
    }

    /// Create a scheduler from a configured `"HH:MM"` day start.
    ///
    /// Blank or malformed values fall back to the default; bad
    /// configuration is never fatal.
    pub fn with_day_start(value: &str) -> Self {
        Self {
            day_start: clock::day_start_minutes(value),
        }
    }

    /// Create a scheduler from raw minutes, clamped to `[0, 1440]`.
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            day_start: minutes.clamp(0, DAY_END_MINUTES),
        }
    }

    /// The day-start boundary in minutes since midnight.
    pub fn day_start(&self) -> i64 {
        self.day_start
    }

    /// Build the day timeline for a snapshot of tasks.
    pub fn schedule(&self, tasks: &[Task]) -> DayTimeline {
        let classified = classify_tasks(tasks, DAY_END_MINUTES);
        let mut packer = Packer::new(self.day_start, DAY_END_MINUTES, &classified.fixed);
        let outcome = packer.pack(&classified.unscheduled);
        assemble(
            classified.fixed,
            outcome.placed,
            self.day_start,
            DAY_END_MINUTES,
            outcome.unplaced,
        )
    }
}

impl Default for DayScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to schedule a day with a configured day-start string.
pub fn schedule_day(tasks: &[Task], day_start: &str) -> DayTimeline {
    DayScheduler::with_day_start(day_start).schedule(tasks)
}
