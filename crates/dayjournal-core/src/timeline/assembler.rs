//! Gapless block assembly for the day timeline.
//!
//! A single forward scan from the day-start boundary to end of day: free
//! time becomes empty blocks, intervals become task blocks, and a
//! collision between two fixed intervals produces an advisory overlap
//! marker without moving or resizing either block.

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use crate::task::Task;

/// One block on the rendered timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Free time
    Empty { start: i64, end: i64 },
    /// Time occupied by a task
    Task {
        start: i64,
        end: i64,
        task: Task,
        auto_placed: bool,
    },
}

impl Block {
    pub fn start(&self) -> i64 {
        match self {
            Self::Empty { start, .. } | Self::Task { start, .. } => *start,
        }
    }

    pub fn end(&self) -> i64 {
        match self {
            Self::Empty { end, .. } | Self::Task { end, .. } => *end,
        }
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Advisory note that an interval began before the previous one ended.
///
/// The marker sits just before the task block whose (clipped) start is
/// `minute`; neither colliding block is dropped or resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMarker {
    pub minute: i64,
}

/// The fully assembled day timeline.
///
/// `blocks` is contiguous and gapless over `[day_start, 1440]`;
/// `overlaps` and `unplaced` are advisory data for the display layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayTimeline {
    pub blocks: Vec<Block>,
    pub overlaps: Vec<OverlapMarker>,
    /// Tasks that could not be placed anywhere on the timeline.
    pub unplaced: usize,
}

/// Merge fixed and packed intervals into a gapless block sequence.
///
/// Intervals are walked in start order (stable: fixed before packed on
/// ties). Intervals ending at or before `day_start` are skipped;
/// intervals starting before it are clipped up to the boundary, which
/// guards a day-start raised after a task was pinned.
pub fn assemble(
    fixed: Vec<Interval>,
    packed: Vec<Interval>,
    day_start: i64,
    day_end: i64,
    unplaced: usize,
) -> DayTimeline {
    let mut intervals = fixed;
    intervals.extend(packed);
    intervals.sort_by_key(|interval| interval.start);

    let mut timeline = DayTimeline {
        blocks: Vec::new(),
        overlaps: Vec::new(),
        unplaced,
    };

    if intervals.is_empty() {
        push_empty(&mut timeline.blocks, day_start, day_end);
        return timeline;
    }

    let mut cursor = day_start;
    for interval in intervals {
        if interval.end <= day_start {
            continue;
        }
        let start = interval.start.max(day_start);
        if start > cursor {
            push_empty(&mut timeline.blocks, cursor, start);
        }
        if start < cursor {
            timeline.overlaps.push(OverlapMarker { minute: start });
        }
        timeline.blocks.push(Block::Task {
            start,
            end: interval.end,
            task: interval.task,
            auto_placed: interval.auto_placed,
        });
        cursor = cursor.max(interval.end);
    }
    if cursor < day_end {
        push_empty(&mut timeline.blocks, cursor, day_end);
    }
    timeline
}

fn push_empty(blocks: &mut Vec<Block>, start: i64, end: i64) {
    if end <= start {
        return;
    }
    blocks.push(Block::Empty { start, end });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DAY_END_MINUTES;
    use crate::task::TaskCategory;
    use chrono::NaiveDate;

    fn make_interval(id: i64, start: i64, end: i64, auto_placed: bool) -> Interval {
        Interval {
            start,
            end,
            task: Task {
                id,
                day: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
                category: TaskCategory::Main,
                title: format!("Task {id}"),
                estimated_hours: (end - start) as f64 / 60.0,
                start_time: None,
                spent_hours: 0.0,
                is_done: false,
            },
            auto_placed,
        }
    }

    fn assert_gapless(timeline: &DayTimeline, day_start: i64) {
        assert_eq!(timeline.blocks.first().map(Block::start), Some(day_start));
        assert_eq!(timeline.blocks.last().map(Block::end), Some(DAY_END_MINUTES));
        for pair in timeline.blocks.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn empty_input_yields_single_empty_block() {
        let timeline = assemble(Vec::new(), Vec::new(), 540, DAY_END_MINUTES, 0);

        assert_eq!(
            timeline.blocks,
            vec![Block::Empty { start: 540, end: DAY_END_MINUTES }]
        );
        assert!(timeline.overlaps.is_empty());
    }

    #[test]
    fn gaps_are_filled_with_empty_blocks() {
        let fixed = vec![make_interval(1, 600, 660, false)];
        let packed = vec![make_interval(2, 660, 780, true)];
        let timeline = assemble(fixed, packed, 540, DAY_END_MINUTES, 0);

        assert_gapless(&timeline, 540);
        assert_eq!(timeline.blocks.len(), 4);
        assert!(timeline.blocks[0].is_empty());
        assert_eq!(timeline.blocks[1].start(), 600);
        assert_eq!(timeline.blocks[2].start(), 660);
        assert!(timeline.blocks[3].is_empty());
        assert_eq!(timeline.blocks[3].end(), DAY_END_MINUTES);
    }

    #[test]
    fn overlap_emits_marker_and_keeps_both_blocks() {
        let fixed = vec![
            make_interval(1, 540, 600, false),
            make_interval(2, 570, 630, false),
        ];
        let timeline = assemble(fixed, Vec::new(), 540, DAY_END_MINUTES, 0);

        assert_eq!(timeline.overlaps, vec![OverlapMarker { minute: 570 }]);
        let task_blocks: Vec<(i64, i64)> = timeline
            .blocks
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| (b.start(), b.end()))
            .collect();
        assert_eq!(task_blocks, vec![(540, 600), (570, 630)]);
        // Cursor continues from the later end.
        assert_eq!(timeline.blocks.last().map(Block::start), Some(630));
    }

    #[test]
    fn interval_before_window_is_skipped() {
        let fixed = vec![make_interval(1, 300, 480, false)];
        let timeline = assemble(fixed, Vec::new(), 540, DAY_END_MINUTES, 0);

        assert_eq!(
            timeline.blocks,
            vec![Block::Empty { start: 540, end: DAY_END_MINUTES }]
        );
    }

    #[test]
    fn interval_straddling_day_start_is_clipped() {
        let fixed = vec![make_interval(1, 480, 600, false)];
        let timeline = assemble(fixed, Vec::new(), 540, DAY_END_MINUTES, 0);

        assert_gapless(&timeline, 540);
        assert_eq!(timeline.blocks[0].start(), 540);
        assert_eq!(timeline.blocks[0].end(), 600);
        assert!(!timeline.blocks[0].is_empty());
    }

    #[test]
    fn unplaced_count_is_carried_through() {
        let timeline = assemble(Vec::new(), Vec::new(), 540, DAY_END_MINUTES, 3);
        assert_eq!(timeline.unplaced, 3);
    }

    #[test]
    fn tie_break_keeps_fixed_before_packed() {
        let fixed = vec![make_interval(1, 600, 660, false)];
        let packed = vec![make_interval(2, 600, 630, true)];
        let timeline = assemble(fixed, packed, 540, DAY_END_MINUTES, 0);

        let order: Vec<i64> = timeline
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Task { task, .. } => Some(task.id),
                Block::Empty { .. } => None,
            })
            .collect();
        assert_eq!(order, vec![1, 2]);
    }
}
