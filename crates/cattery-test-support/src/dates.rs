//! Date construction shorthands for test fixtures.

use chrono::{DateTime, TimeZone, Utc};

/// Midnight UTC on the given calendar date.
///
/// # Panics
///
/// Panics if the date does not exist (e.g. February 30th).
#[must_use]
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    utc_hms(year, month, day, 0, 0, 0)
}

/// The given UTC calendar date and wall time.
///
/// # Panics
///
/// Panics if the date or time does not exist.
#[must_use]
pub fn utc_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("fixture date must be a valid UTC instant")
}
