//! Slot instance model.
//!
//! A [`SlotInstance`] is a catalog [`TimeSlot`](super::TimeSlot)
//! instantiated on a specific calendar date within the displayed week.
//! Instances are derived fresh from the week anchor on every evaluation
//! and are never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cell of the weekly grid: a catalog slot on a concrete date.
///
/// # Identity
/// Two instances refer to the same cell iff their `(start, end)` pair is
/// equal. Selection membership and self-occupancy exclusion both use this
/// equality, never the slot or day fields alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInstance {
    /// Canonical weekday of the instance date (1 = Monday .. 7 = Sunday).
    pub day_of_week: u8,
    /// Absolute start of the cell.
    pub start: DateTime<Utc>,
    /// Absolute end of the cell. Always after `start`.
    pub end: DateTime<Utc>,
    /// Catalog slot this cell was derived from.
    pub slot_id: u32,
}

impl SlotInstance {
    /// Whether `other` denotes the same grid cell (start+end equality).
    #[inline]
    pub fn same_cell(&self, other: &SlotInstance) -> bool {
        self.start == other.start && self.end == other.end
    }
}
