//! Time-slot catalog model.
//!
//! A [`TimeSlot`] defines one recurring daily teaching period by its start
//! and end time of day. The [`TimeSlotCatalog`] is the ordered list of
//! periods available to every class; it is supplied by an external
//! provider and loaded once per form session.
//!
//! # Invariant
//! A catalog is never empty: construction substitutes the three built-in
//! default periods when the supplied list is empty, so downstream grid
//! building always has at least one row.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A catalog entry defining one recurring daily teaching period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier within the catalog.
    pub id: u32,
    /// Start time of day.
    pub start: NaiveTime,
    /// End time of day. Must be after `start` for the slot to produce
    /// grid cells.
    pub end: NaiveTime,
    /// Display label (e.g. "07:30 - 09:00").
    pub label: String,
}

impl TimeSlot {
    /// Creates a slot with a label derived from its time range.
    pub fn new(id: u32, start: NaiveTime, end: NaiveTime) -> Self {
        let label = format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"));
        Self {
            id,
            start,
            end,
            label,
        }
    }

    /// Creates a slot from "HH:MM" strings.
    ///
    /// Returns `None` if either string does not parse, or if the end does
    /// not come after the start. This is the boundary where externally
    /// supplied catalog data is checked.
    pub fn from_hhmm(id: u32, start: &str, end: &str) -> Option<Self> {
        let start = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(end, "%H:%M").ok()?;
        if end <= start {
            return None;
        }
        Some(Self::new(id, start, end))
    }

    /// Sets a custom display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// The ordered list of reusable daily periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotCatalog {
    slots: Vec<TimeSlot>,
}

impl TimeSlotCatalog {
    /// Creates a catalog from the supplied slots.
    ///
    /// An empty list substitutes the built-in defaults, preserving the
    /// catalog-is-never-empty invariant.
    pub fn from_slots(slots: Vec<TimeSlot>) -> Self {
        if slots.is_empty() {
            log::debug!("empty time-slot catalog supplied, substituting defaults");
            return Self::default();
        }
        Self { slots }
    }

    /// Appends a slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Looks up a slot by identifier.
    pub fn slot(&self, id: u32) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Finds the slot whose start time of day matches exactly.
    ///
    /// Used to align a raw busy range to a catalog period. Matching by an
    /// explicit slot identifier is preferred when the data carries one;
    /// this exact-time lookup is the fallback for bare ranges.
    pub fn slot_for_start(&self, start: NaiveTime) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.start == start)
    }

    /// Slots in catalog order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of periods in the catalog.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false` for catalogs built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TimeSlotCatalog {
    /// The three built-in default periods, used when the external catalog
    /// is unavailable or empty.
    fn default() -> Self {
        let defaults: [(u32, &str, &str); 3] = [
            (1, "07:30", "09:00"),
            (2, "09:15", "10:45"),
            (3, "14:00", "15:30"),
        ];
        Self {
            slots: defaults
                .iter()
                .filter_map(|(id, s, e)| TimeSlot::from_hhmm(*id, s, e))
                .collect(),
        }
    }
}
