//! Per-resource busy index.
//!
//! Normalizes the heterogeneous busy data of one resource (a teacher or
//! a room) into a fast canonical key set plus a retained raw range list.
//! Pre-aligned entries and ranges that start exactly on a catalog period
//! land in the key set; every raw range is additionally kept for a
//! pairwise half-open overlap test, so commitments that straddle or sit
//! inside a period are still detected.
//!
//! The index is immutable after build. Callers construct a fresh one
//! whenever the resource identity or the displayed date range changes.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::weekday::weekday_of;
use crate::models::{BusyInterval, RawBusyEntry, SlotInstance, TimeSlotCatalog};

/// Busy lookup for a single resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusyIndex {
    /// Canonical `(weekday, slot_id)` occupancy keys.
    keys: HashSet<(u8, u32)>,
    /// Retained raw ranges for the fallback overlap test.
    ranges: Vec<(DateTime<Utc>, DateTime<Utc>)>,
}

impl BusyIndex {
    /// An index with no commitments (everything reads as free).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the index from raw provider entries.
    ///
    /// Canonicalization rules, per entry:
    /// - a slot reference inserts its `(day, slot_id)` key directly;
    /// - a raw range is always retained for the overlap test, and
    ///   additionally inserts a key when its start time of day matches a
    ///   catalog period exactly;
    /// - a malformed entry is skipped. It never aborts the build.
    pub fn build(entries: &[RawBusyEntry], catalog: &TimeSlotCatalog) -> Self {
        let mut keys = HashSet::new();
        let mut ranges = Vec::new();

        for raw in entries {
            match BusyInterval::from_raw(raw) {
                Some(BusyInterval::SlotRef { day, slot_id }) => {
                    keys.insert((day, slot_id));
                }
                Some(BusyInterval::Range { start, end }) => {
                    if let Some(slot) = catalog.slot_for_start(start.time()) {
                        keys.insert((weekday_of(start.date_naive()), slot.id));
                    }
                    ranges.push((start, end));
                }
                None => {
                    log::debug!("skipping malformed busy entry: {raw:?}");
                }
            }
        }

        Self { keys, ranges }
    }

    /// Whether the resource has a commitment overlapping this cell.
    ///
    /// True iff the cell's canonical key is occupied, or any retained raw
    /// range intersects the cell's half-open `[start, end)`:
    /// `a.start < b.end && b.start < a.end`. Touching ranges (one ends
    /// exactly where the cell starts) do not count as busy.
    pub fn is_busy(&self, slot: &SlotInstance) -> bool {
        if self.keys.contains(&(slot.day_of_week, slot.slot_id)) {
            return true;
        }
        self.ranges
            .iter()
            .any(|(start, end)| *start < slot.end && slot.start < *end)
    }

    /// Whether the index holds no commitments at all.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn catalog() -> TimeSlotCatalog {
        TimeSlotCatalog::default()
    }

    fn slot_ref(day: u8, slot_id: u32) -> RawBusyEntry {
        RawBusyEntry {
            day: Some(day),
            slot_id: Some(slot_id),
            ..Default::default()
        }
    }

    fn range(start: DateTime<Utc>, end: DateTime<Utc>) -> RawBusyEntry {
        RawBusyEntry {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    /// Wednesday 2024-11-06, catalog slot 1 (07:30 - 09:00).
    fn wednesday_first_period() -> SlotInstance {
        SlotInstance {
            day_of_week: 3,
            start: Utc.with_ymd_and_hms(2024, 11, 6, 7, 30, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 11, 6, 9, 0, 0).unwrap(),
            slot_id: 1,
        }
    }

    #[test]
    fn test_key_hit_from_slot_ref() {
        let index = BusyIndex::build(&[slot_ref(3, 1)], &catalog());
        assert!(index.is_busy(&wednesday_first_period()));
    }

    #[test]
    fn test_key_miss_other_day_or_slot() {
        let index = BusyIndex::build(&[slot_ref(3, 1)], &catalog());

        let mut other_day = wednesday_first_period();
        other_day.day_of_week = 4;
        // Range fallback could still fire; this entry has no range.
        assert!(!index.is_busy(&other_day));

        let mut other_slot = wednesday_first_period();
        other_slot.slot_id = 2;
        assert!(!index.is_busy(&other_slot));
    }

    #[test]
    fn test_sunday_zero_slot_ref_lands_on_day_seven() {
        let index = BusyIndex::build(&[slot_ref(0, 1)], &catalog());
        let sunday = SlotInstance {
            day_of_week: 7,
            start: Utc.with_ymd_and_hms(2024, 11, 10, 7, 30, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 11, 10, 9, 0, 0).unwrap(),
            slot_id: 1,
        };
        assert!(index.is_busy(&sunday));
    }

    #[test]
    fn test_aligned_range_creates_key() {
        // Starts exactly at slot 1's start on Monday 2024-11-04.
        let start = Utc.with_ymd_and_hms(2024, 11, 4, 7, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap();
        let index = BusyIndex::build(&[range(start, end)], &catalog());

        let monday = SlotInstance {
            day_of_week: 1,
            start,
            end,
            slot_id: 1,
        };
        assert!(index.is_busy(&monday));
    }

    #[test]
    fn test_unaligned_range_hits_via_overlap_fallback() {
        // Room busy 07:30 - 09:00; candidate cell starts 08:00. No exact
        // key match, detected through interval intersection.
        let busy_start = Utc.with_ymd_and_hms(2024, 11, 4, 7, 30, 0).unwrap();
        let busy_end = Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap();
        let index = BusyIndex::build(
            &[range(busy_start, busy_end)],
            &TimeSlotCatalog::from_slots(vec![
                crate::models::TimeSlot::from_hhmm(1, "08:00", "09:30").unwrap(),
            ]),
        );

        let candidate = SlotInstance {
            day_of_week: 1,
            start: Utc.with_ymd_and_hms(2024, 11, 4, 8, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 11, 4, 9, 30, 0).unwrap(),
            slot_id: 1,
        };
        assert!(index.is_busy(&candidate));
    }

    #[test]
    fn test_touching_ranges_are_not_busy() {
        // Commitment ends exactly when the cell starts: half-open, free.
        let busy_start = Utc.with_ymd_and_hms(2024, 11, 4, 6, 0, 0).unwrap();
        let busy_end = Utc.with_ymd_and_hms(2024, 11, 4, 7, 30, 0).unwrap();
        let index = BusyIndex::build(&[range(busy_start, busy_end)], &catalog());

        let cell = SlotInstance {
            day_of_week: 1,
            start: Utc.with_ymd_and_hms(2024, 11, 4, 7, 30, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap(),
            slot_id: 1,
        };
        assert!(!index.is_busy(&cell));
    }

    #[test]
    fn test_malformed_entries_skipped_rest_processed() {
        let entries = vec![
            RawBusyEntry::default(), // nothing populated
            RawBusyEntry {
                day: Some(12),
                slot_id: Some(1),
                ..Default::default()
            }, // weekday out of range
            slot_ref(3, 1), // valid
        ];
        let index = BusyIndex::build(&entries, &catalog());
        assert!(index.is_busy(&wednesday_first_period()));
    }

    #[test]
    fn test_empty_index() {
        let index = BusyIndex::empty();
        assert!(index.is_empty());
        assert!(!index.is_busy(&wednesday_first_period()));

        let built = BusyIndex::build(&[], &catalog());
        assert!(built.is_empty());
    }
}
