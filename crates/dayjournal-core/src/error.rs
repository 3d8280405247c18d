//! Core error types for dayjournal-core.
//!
//! This module defines the error hierarchy using thiserror. Note that the
//! scheduler itself has no fatal failure mode: malformed clock values and
//! unplaceable tasks degrade to advisory output, and these types are used
//! by the storage layer and by callers that validate user input.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayjournal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Clock text parsing errors
    #[error("Clock error: {0}")]
    Clock(#[from] ClockError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when parsing `"HH:MM"` clock text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The value is empty or whitespace-only
    #[error("clock value is empty")]
    Empty,

    /// The value is not two colon-separated integers
    #[error("clock value '{0}' must use HH:MM (24-hour)")]
    InvalidFormat(String),

    /// Hour or minute is outside 00:00-23:59
    #[error("clock value '{0}' is outside 00:00-23:59")]
    OutOfRange(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(DatabaseError::from(err))
    }
}

/// Admission-control errors for journal writes.
///
/// These carry the user-facing messages of the journal's validation
/// rules; the scheduler never raises them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title is empty after trimming
    #[error("Task name is required")]
    EmptyTitle,

    /// Estimated or spent hours are negative
    #[error("Hours cannot be negative")]
    NegativeHours,

    /// Category name is not one of the known five
    #[error("Invalid task type: {0}")]
    UnknownCategory(String),

    /// The day already holds the maximum for this category
    #[error("{label} supports max {limit} task(s)")]
    CategoryLimit { label: &'static str, limit: u32 },

    /// Habit name is empty after trimming
    #[error("Habit name is required")]
    EmptyHabitName,

    /// The journal already holds the maximum number of habits
    #[error("Only up to {0} habits are allowed")]
    HabitLimit(u32),

    /// A habit with this name already exists
    #[error("Habit already exists")]
    DuplicateHabit,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
