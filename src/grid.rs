//! Week grid building.
//!
//! Given any anchor date, computes the Monday-aligned calendar week
//! containing it and crosses those 7 dates with the time-slot catalog to
//! produce the full matrix of [`SlotInstance`] cells. Pure functions, no
//! errors: an empty catalog simply yields an empty matrix (the catalog
//! constructors substitute defaults, so this only arises with a
//! hand-built empty catalog).
//!
//! # Week convention
//! Weeks run Monday through Sunday. A Sunday anchor belongs to the week
//! of the preceding Monday.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{SlotInstance, TimeSlotCatalog};

/// Monday-aligned start of the calendar week containing `anchor`.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    let back = anchor.weekday().num_days_from_monday() as u64;
    anchor.checked_sub_days(Days::new(back)).unwrap_or(anchor)
}

/// The 7 ordered dates (Monday..Sunday) of the week containing `anchor`.
pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = week_start(anchor);
    std::array::from_fn(|i| {
        monday
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(monday)
    })
}

/// Builds the full slot-instance matrix for the week containing `anchor`.
///
/// Day-major order: all of Monday's periods, then Tuesday's, and so on.
/// Catalog entries whose end is not after their start produce no cell,
/// preserving the `end > start` invariant on every instance.
pub fn build_week(anchor: NaiveDate, catalog: &TimeSlotCatalog) -> Vec<SlotInstance> {
    let mut cells = Vec::with_capacity(7 * catalog.len());
    for (offset, date) in week_dates(anchor).into_iter().enumerate() {
        let day_of_week = offset as u8 + 1;
        for slot in catalog.slots() {
            if slot.end <= slot.start {
                continue;
            }
            cells.push(SlotInstance {
                day_of_week,
                start: date.and_time(slot.start).and_utc(),
                end: date.and_time(slot.end).and_utc(),
                slot_id: slot.id,
            });
        }
    }
    cells
}
