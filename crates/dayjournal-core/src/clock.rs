//! Conversion between `"HH:MM"` clock text and minutes since midnight.
//!
//! The timeline works in integer minutes in `[0, 1440]`, where `1440`
//! marks end-of-day ("24:00") rather than the start of the next day.

use crate::error::ClockError;

/// End of day in minutes since midnight.
pub const DAY_END_MINUTES: i64 = 24 * 60;

/// Default day-start boundary as clock text.
pub const DEFAULT_DAY_START: &str = "09:00";

/// Default day-start boundary in minutes since midnight (09:00).
pub const DEFAULT_DAY_START_MINUTES: i64 = 9 * 60;

/// Parse an `"HH:MM"` clock value into minutes since midnight.
///
/// Leading and trailing whitespace is ignored. Hours must be 0-23 and
/// minutes 0-59, so parsing can never yield `1440`.
///
/// # Errors
/// Returns a [`ClockError`] if the value is empty, is not exactly two
/// colon-separated integers, or is out of range.
pub fn parse_hhmm(value: &str) -> Result<i64, ClockError> {
    let clean = value.trim();
    if clean.is_empty() {
        return Err(ClockError::Empty);
    }
    let (hour_part, minute_part) = clean
        .split_once(':')
        .ok_or_else(|| ClockError::InvalidFormat(clean.to_string()))?;
    if minute_part.contains(':') {
        return Err(ClockError::InvalidFormat(clean.to_string()));
    }
    let hour: i64 = hour_part
        .parse()
        .map_err(|_| ClockError::InvalidFormat(clean.to_string()))?;
    let minute: i64 = minute_part
        .parse()
        .map_err(|_| ClockError::InvalidFormat(clean.to_string()))?;
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(ClockError::OutOfRange(clean.to_string()));
    }
    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as `"HH:MM"`.
///
/// Input is clamped to `[0, 1440]`; the boundary value formats as
/// `"24:00"`, meaning end-of-day rather than start-of-next-day.
pub fn format_hhmm(minutes: i64) -> String {
    let clipped = minutes.clamp(0, DAY_END_MINUTES);
    if clipped == DAY_END_MINUTES {
        return "24:00".to_string();
    }
    format!("{:02}:{:02}", clipped / 60, clipped % 60)
}

/// Resolve a configured day-start value to minutes since midnight.
///
/// Blank means "use the default"; malformed values also fall back to the
/// default so scheduling always proceeds.
pub fn day_start_minutes(value: &str) -> i64 {
    if value.trim().is_empty() {
        return DEFAULT_DAY_START_MINUTES;
    }
    parse_hhmm(value).unwrap_or(DEFAULT_DAY_START_MINUTES)
}
