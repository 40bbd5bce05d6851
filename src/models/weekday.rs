//! Canonical weekday numbering.
//!
//! Everything inside this crate uses ISO weekday numbers: 1 = Monday
//! through 7 = Sunday. External busy data frequently arrives with the
//! JavaScript/`Date` convention where Sunday is 0, which is a recurring
//! off-by-one hazard. The remapping lives here, in one pure function,
//! and nowhere else.

use chrono::{Datelike, NaiveDate};

/// Converts a possibly Sunday-0 weekday number to the canonical 1..=7 form.
///
/// - `0` (Sunday in the 0-based convention) maps to `7`.
/// - `1..=7` pass through unchanged (already canonical, or Mon..Sat in
///   the 0-based convention, which coincide).
/// - Anything above `7` is rejected as malformed.
pub fn canonical_weekday(day: u8) -> Option<u8> {
    match day {
        0 => Some(7),
        1..=7 => Some(day),
        _ => None,
    }
}

/// Canonical weekday of a calendar date (1 = Monday .. 7 = Sunday).
#[inline]
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}
