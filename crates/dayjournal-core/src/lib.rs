//! # Day Journal Core Library
//!
//! This library provides the core business logic for the Day Journal
//! daily planner. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over the same
//! core library.
//!
//! ## Architecture
//!
//! - **Clock**: `"HH:MM"` parsing and formatting over a minute-based
//!   24-hour axis
//! - **Timeline**: classification of tasks into fixed and unscheduled
//!   sets, first-fit packing of unscheduled tasks into free gaps, and
//!   assembly of a gapless block sequence with overlap markers
//! - **Storage**: SQLite-based persistence for tasks, habits, settings
//!   and the daily quote table
//! - **Stats**: habit completion ratios over week, month and year
//!
//! ## Key Components
//!
//! - [`DayScheduler`]: one-call scheduling of a day's tasks
//! - [`DayTimeline`]: the assembled block sequence
//! - [`JournalDb`]: task, habit and settings persistence

pub mod clock;
pub mod error;
pub mod scheduler;
pub mod stats;
pub mod storage;
pub mod task;
pub mod timeline;

pub use error::{ClockError, CoreError, DatabaseError, ValidationError};
pub use scheduler::{schedule_day, DayScheduler};
pub use storage::{Habit, JournalDb};
pub use task::{Task, TaskCategory};
pub use timeline::{Block, DayTimeline, Interval, OverlapMarker};
