//! First-fit packing of unscheduled tasks into free day slots.
//!
//! Greedy and deterministic: tasks are taken in category-rank order with
//! id as the tie-break, and each goes into the earliest gap large enough
//! to hold it. Fixed intervals are never moved or resized. The heuristic
//! makes no attempt at globally optimal packing; a task can stay
//! unplaced even when reordering the queue would free enough contiguous
//! room. O(n^2) worst case, fine at single-day scale.

use super::interval::Interval;
use crate::task::Task;

/// Mutable occupied-slot state for one packing pass.
///
/// Built fresh per scheduling call and discarded afterwards.
pub struct Packer {
    day_start: i64,
    day_end: i64,
    /// Occupied `(start, end)` ranges, kept sorted by start.
    occupied: Vec<(i64, i64)>,
}

/// Result of a packing pass.
#[derive(Debug, Clone, Default)]
pub struct PackOutcome {
    /// Auto-placed intervals in placement order.
    pub placed: Vec<Interval>,
    /// Tasks that fit nowhere in the remaining day.
    pub unplaced: usize,
}

impl Packer {
    /// Create a packer seeded with the fixed intervals' occupied ranges.
    pub fn new(day_start: i64, day_end: i64, fixed: &[Interval]) -> Self {
        let mut occupied: Vec<(i64, i64)> =
            fixed.iter().map(|interval| (interval.start, interval.end)).collect();
        occupied.sort_by_key(|slot| slot.0);
        Self {
            day_start,
            day_end,
            occupied,
        }
    }

    /// Earliest cursor position with `duration` free minutes, if any.
    ///
    /// Walks the occupied set in start order: slots already behind the
    /// cursor are skipped, a gap before the next slot wins if it is wide
    /// enough, otherwise the cursor advances past the slot. The trailing
    /// gap at day's end is checked last.
    pub fn find_first_slot(&self, duration: i64) -> Option<i64> {
        if duration <= 0 {
            return None;
        }
        let mut cursor = self.day_start;
        for &(start, end) in &self.occupied {
            if end <= cursor {
                continue;
            }
            if start > cursor && start - cursor >= duration {
                return Some(cursor);
            }
            cursor = cursor.max(end);
        }
        if self.day_end - cursor >= duration {
            return Some(cursor);
        }
        None
    }

    /// Place unscheduled tasks in priority order.
    ///
    /// Priority: category rank first, then task id ascending. Placed
    /// intervals immediately join the occupied set, so later tasks see
    /// them; tasks with no slot are counted, not errors.
    pub fn pack(&mut self, unscheduled: &[Task]) -> PackOutcome {
        let mut queue: Vec<Task> = unscheduled.to_vec();
        queue.sort_by_key(|task| (task.category.rank(), task.id));

        let mut outcome = PackOutcome::default();
        for task in queue {
            let duration = task.estimated_minutes();
            let Some(slot) = self.find_first_slot(duration) else {
                outcome.unplaced += 1;
                continue;
            };
            let end = self.day_end.min(slot + duration);
            self.occupy(slot, end);
            outcome.placed.push(Interval {
                start: slot,
                end,
                task,
                auto_placed: true,
            });
        }
        outcome
    }

    fn occupy(&mut self, start: i64, end: i64) {
        let at = self.occupied.partition_point(|slot| slot.0 <= start);
        self.occupied.insert(at, (start, end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DAY_END_MINUTES;
    use crate::task::TaskCategory;
    use crate::timeline::classify_tasks;
    use chrono::NaiveDate;

    fn make_task(id: i64, category: TaskCategory, estimated_hours: f64) -> Task {
        Task {
            id,
            day: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            category,
            title: format!("Task {id}"),
            estimated_hours,
            start_time: None,
            spent_hours: 0.0,
            is_done: false,
        }
    }

    fn fixed_task(id: i64, start_time: &str, estimated_hours: f64) -> Task {
        Task {
            start_time: Some(start_time.to_string()),
            ..make_task(id, TaskCategory::Main, estimated_hours)
        }
    }

    #[test]
    fn first_slot_in_empty_day_is_day_start() {
        let packer = Packer::new(540, DAY_END_MINUTES, &[]);
        assert_eq!(packer.find_first_slot(60), Some(540));
    }

    #[test]
    fn zero_duration_never_fits() {
        let packer = Packer::new(540, DAY_END_MINUTES, &[]);
        assert_eq!(packer.find_first_slot(0), None);
        assert_eq!(packer.find_first_slot(-30), None);
    }

    #[test]
    fn slot_after_fixed_interval() {
        let fixed = classify_tasks(&[fixed_task(1, "10:00", 1.0)], DAY_END_MINUTES).fixed;
        let packer = Packer::new(540, DAY_END_MINUTES, &fixed);

        // 09:00-10:00 gap is exactly 60 minutes.
        assert_eq!(packer.find_first_slot(60), Some(540));
        // 120 minutes does not fit before 10:00 but fits after 11:00.
        assert_eq!(packer.find_first_slot(120), Some(660));
    }

    #[test]
    fn no_slot_when_day_is_full() {
        let fixed = classify_tasks(&[fixed_task(1, "09:00", 15.0)], DAY_END_MINUTES).fixed;
        let packer = Packer::new(540, DAY_END_MINUTES, &fixed);
        assert_eq!(packer.find_first_slot(1), None);
    }

    #[test]
    fn pack_orders_by_category_then_id() {
        let mut packer = Packer::new(540, DAY_END_MINUTES, &[]);
        let outcome = packer.pack(&[
            make_task(3, TaskCategory::Small, 1.0),
            make_task(2, TaskCategory::Focus, 1.0),
            make_task(5, TaskCategory::Focus, 1.0),
            make_task(1, TaskCategory::Main, 1.0),
        ]);

        let ids: Vec<i64> = outcome.placed.iter().map(|iv| iv.task.id).collect();
        assert_eq!(ids, vec![2, 5, 1, 3]);
        assert_eq!(outcome.placed[0].start, 540);
        assert_eq!(outcome.placed[3].end, 540 + 4 * 60);
        assert_eq!(outcome.unplaced, 0);
    }

    #[test]
    fn placed_intervals_become_occupied() {
        let fixed = classify_tasks(&[fixed_task(10, "10:00", 1.0)], DAY_END_MINUTES).fixed;
        let mut packer = Packer::new(540, DAY_END_MINUTES, &fixed);
        let outcome = packer.pack(&[
            make_task(1, TaskCategory::Main, 1.0),
            make_task(2, TaskCategory::Main, 1.0),
        ]);

        // First fills 09:00-10:00, second goes after the fixed block.
        assert_eq!(outcome.placed[0].start, 540);
        assert_eq!(outcome.placed[0].end, 600);
        assert_eq!(outcome.placed[1].start, 660);
        assert_eq!(outcome.placed[1].end, 720);
    }

    #[test]
    fn unplaceable_task_is_counted_and_dropped() {
        let mut packer = Packer::new(1380, DAY_END_MINUTES, &[]);
        let outcome = packer.pack(&[make_task(1, TaskCategory::Main, 2.0)]);

        assert!(outcome.placed.is_empty());
        assert_eq!(outcome.unplaced, 1);
    }

    #[test]
    fn first_fit_fragments_early_gaps() {
        // Fixed block 10:00-23:00. The 30-minute task claims the front
        // of the morning gap, leaving a 30-minute remainder the 60-minute
        // task cannot use, so it lands at the day's tail instead.
        let fixed = classify_tasks(&[fixed_task(10, "10:00", 13.0)], DAY_END_MINUTES).fixed;
        let mut packer = Packer::new(540, DAY_END_MINUTES, &fixed);
        let outcome = packer.pack(&[
            make_task(1, TaskCategory::Main, 0.5),
            make_task(2, TaskCategory::Main, 1.0),
        ]);

        assert_eq!(outcome.placed.len(), 2);
        assert_eq!(outcome.placed[0].start, 540);
        assert_eq!(outcome.placed[1].start, 1380);
        assert_eq!(outcome.unplaced, 0);
    }
}
