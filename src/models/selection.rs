//! Selection-set model.
//!
//! The set of slot instances chosen for the class being created or
//! edited. Two independent sets exist per form session: "current" (the
//! live selection the user is editing) and "original" (an immutable
//! snapshot of the class's pre-existing schedule, empty for a new class).
//! Both use the same membership test: `(start, end)` equality.
//!
//! `toggle` is persistent-style: it returns a new set rather than
//! mutating in place, so callers can detect change by comparing
//! references or keep the prior set as a snapshot.

use serde::{Deserialize, Serialize};

use super::SlotInstance;

/// An ordered set of selected slot instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    slots: Vec<SlotInstance>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from existing instances (the "original"
    /// baseline of a class under edit is built this way).
    pub fn from_slots(slots: Vec<SlotInstance>) -> Self {
        Self { slots }
    }

    /// Whether the cell is selected, matched by `(start, end)` equality.
    pub fn contains(&self, slot: &SlotInstance) -> bool {
        self.slots.iter().any(|s| s.same_cell(slot))
    }

    /// Whether any selected slot falls on the given canonical weekday.
    ///
    /// Drives the day-lock policy: non-anchor days stay locked until the
    /// anchor weekday has at least one selection.
    pub fn has_day(&self, day_of_week: u8) -> bool {
        self.slots.iter().any(|s| s.day_of_week == day_of_week)
    }

    /// Returns a new set with the slot's membership flipped.
    ///
    /// Removes the slot if present, appends it otherwise. Toggling the
    /// same cell twice restores the prior membership.
    pub fn toggle(&self, slot: &SlotInstance) -> SelectionSet {
        if self.contains(slot) {
            SelectionSet {
                slots: self
                    .slots
                    .iter()
                    .filter(|s| !s.same_cell(slot))
                    .cloned()
                    .collect(),
            }
        } else {
            let mut slots = self.slots.clone();
            slots.push(slot.clone());
            SelectionSet { slots }
        }
    }

    /// Selected instances in insertion order.
    pub fn slots(&self) -> &[SlotInstance] {
        &self.slots
    }

    /// Number of selected cells.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn cell(day: u8, date: u32, hour: u32) -> SlotInstance {
        SlotInstance {
            day_of_week: day,
            start: Utc.with_ymd_and_hms(2024, 11, date, hour, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 11, date, hour + 1, 30, 0).unwrap(),
            slot_id: 1,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = SelectionSet::new();
        let slot = cell(1, 4, 8);

        let one = empty.toggle(&slot);
        assert!(one.contains(&slot));
        assert_eq!(one.len(), 1);

        let back = one.toggle(&slot);
        assert!(!back.contains(&slot));
        assert_eq!(back.len(), 0);
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let base = SelectionSet::from_slots(vec![cell(1, 4, 8), cell(3, 6, 9)]);
        let slot = cell(5, 8, 14);

        let round_trip = base.toggle(&slot).toggle(&slot);
        assert_eq!(round_trip, base);

        // Also for a slot already present.
        let existing = cell(1, 4, 8);
        let round_trip2 = base.toggle(&existing).toggle(&existing);
        assert_eq!(round_trip2.len(), base.len());
        assert!(round_trip2.contains(&existing));
    }

    #[test]
    fn test_toggle_does_not_mutate_receiver() {
        let base = SelectionSet::from_slots(vec![cell(1, 4, 8)]);
        let slot = cell(2, 5, 9);
        let _next = base.toggle(&slot);
        assert_eq!(base.len(), 1);
        assert!(!base.contains(&slot));
    }

    #[test]
    fn test_membership_by_time_identity() {
        let base = SelectionSet::from_slots(vec![cell(1, 4, 8)]);
        let mut same_times = cell(1, 4, 8);
        same_times.slot_id = 42;
        assert!(base.contains(&same_times));
    }

    #[test]
    fn test_has_day() {
        let base = SelectionSet::from_slots(vec![cell(3, 6, 8), cell(3, 6, 9)]);
        assert!(base.has_day(3));
        assert!(!base.has_day(1));
        assert!(!SelectionSet::new().has_day(3));
    }
}
