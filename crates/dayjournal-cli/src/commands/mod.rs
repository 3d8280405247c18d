//! CLI command modules.

pub mod common;
pub mod habit;
pub mod quote;
pub mod setting;
pub mod stats;
pub mod task;
pub mod timeline;
