//! Day-timeline building blocks.
//!
//! This module provides:
//! - Interval classification (fixed vs unscheduled tasks)
//! - First-fit packing of unscheduled tasks into free slots
//! - Gapless block assembly with overlap markers

mod assembler;
mod interval;
mod packer;

pub use assembler::{assemble, Block, DayTimeline, OverlapMarker};
pub use interval::{classify_tasks, ClassifiedTasks, Interval};
pub use packer::{PackOutcome, Packer};
