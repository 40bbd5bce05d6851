//! Busy-interval model.
//!
//! A busy interval represents one existing commitment of a teacher or a
//! room. External free/busy providers deliver two shapes of entry:
//! pre-aligned day+slot references, and raw start/end timestamp ranges.
//! [`RawBusyEntry`] is the tolerant deserialization boundary for both;
//! [`BusyInterval`] is the explicit tagged union they are canonicalized
//! into before indexing.
//!
//! # Failure semantics
//! An entry missing its required fields is malformed: canonicalization
//! returns `None` and callers skip it. A bad entry never aborts
//! processing of the remainder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::weekday::canonical_weekday;

/// A free/busy entry as delivered by an external provider.
///
/// All fields are optional because the two entry shapes populate
/// different subsets, and real payloads routinely omit fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBusyEntry {
    /// Weekday of a pre-aligned entry. Accepts the 0=Sunday convention.
    pub day: Option<u8>,
    /// Catalog slot of a pre-aligned entry.
    pub slot_id: Option<u32>,
    /// Start of a raw range entry.
    pub start: Option<DateTime<Utc>>,
    /// End of a raw range entry.
    pub end: Option<DateTime<Utc>>,
}

/// One commitment of a teacher or room, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusyInterval {
    /// A commitment pre-aligned to a catalog slot on a weekday
    /// (canonical numbering, 1 = Monday .. 7 = Sunday).
    SlotRef { day: u8, slot_id: u32 },
    /// A raw absolute time range, matched against grid cells by
    /// half-open interval intersection.
    Range {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl BusyInterval {
    /// Canonicalizes a raw provider entry.
    ///
    /// The explicit slot reference is preferred whenever both `day` and
    /// `slot_id` are present; a `start`/`end` pair is the fallback shape.
    /// Weekday numbers are remapped to the canonical convention here, so
    /// no 0=Sunday value survives past this point.
    ///
    /// Returns `None` for malformed entries: missing required fields, an
    /// out-of-range weekday, or a range whose end is not after its start.
    pub fn from_raw(raw: &RawBusyEntry) -> Option<BusyInterval> {
        if let (Some(day), Some(slot_id)) = (raw.day, raw.slot_id) {
            let day = canonical_weekday(day)?;
            return Some(BusyInterval::SlotRef { day, slot_id });
        }
        if let (Some(start), Some(end)) = (raw.start, raw.end) {
            if end > start {
                return Some(BusyInterval::Range { start, end });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_raw_slot_ref() {
        let raw = RawBusyEntry {
            day: Some(3),
            slot_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            BusyInterval::from_raw(&raw),
            Some(BusyInterval::SlotRef { day: 3, slot_id: 1 })
        );
    }

    #[test]
    fn test_from_raw_remaps_sunday() {
        let raw = RawBusyEntry {
            day: Some(0),
            slot_id: Some(2),
            ..Default::default()
        };
        assert_eq!(
            BusyInterval::from_raw(&raw),
            Some(BusyInterval::SlotRef { day: 7, slot_id: 2 })
        );
    }

    #[test]
    fn test_from_raw_range() {
        let start = Utc.with_ymd_and_hms(2024, 11, 4, 7, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap();
        let raw = RawBusyEntry {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        };
        assert_eq!(
            BusyInterval::from_raw(&raw),
            Some(BusyInterval::Range { start, end })
        );
    }

    #[test]
    fn test_from_raw_prefers_slot_ref_over_range() {
        // When both shapes are populated the explicit identifier wins.
        let raw = RawBusyEntry {
            day: Some(1),
            slot_id: Some(1),
            start: Some(Utc.with_ymd_and_hms(2024, 11, 4, 7, 30, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap()),
        };
        assert!(matches!(
            BusyInterval::from_raw(&raw),
            Some(BusyInterval::SlotRef { .. })
        ));
    }

    #[test]
    fn test_from_raw_malformed() {
        // Nothing populated.
        assert_eq!(BusyInterval::from_raw(&RawBusyEntry::default()), None);

        // Day without slot, slot without day.
        let day_only = RawBusyEntry {
            day: Some(2),
            ..Default::default()
        };
        assert_eq!(BusyInterval::from_raw(&day_only), None);
        let slot_only = RawBusyEntry {
            slot_id: Some(2),
            ..Default::default()
        };
        assert_eq!(BusyInterval::from_raw(&slot_only), None);

        // Out-of-range weekday.
        let bad_day = RawBusyEntry {
            day: Some(9),
            slot_id: Some(1),
            ..Default::default()
        };
        assert_eq!(BusyInterval::from_raw(&bad_day), None);

        // Inverted range.
        let t0 = Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 11, 4, 7, 0, 0).unwrap();
        let inverted = RawBusyEntry {
            start: Some(t0),
            end: Some(t1),
            ..Default::default()
        };
        assert_eq!(BusyInterval::from_raw(&inverted), None);

        // Start without end.
        let open = RawBusyEntry {
            start: Some(t0),
            ..Default::default()
        };
        assert_eq!(BusyInterval::from_raw(&open), None);
    }

    #[test]
    fn test_raw_entry_tolerates_missing_fields() {
        // Wire shape: absent fields deserialize to None.
        let raw: RawBusyEntry = serde_json::from_str(r#"{"day": 3, "slot_id": 1}"#).unwrap();
        assert_eq!(raw.day, Some(3));
        assert_eq!(raw.slot_id, Some(1));
        assert_eq!(raw.start, None);
        assert_eq!(raw.end, None);

        let empty: RawBusyEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RawBusyEntry::default());
    }

    #[test]
    fn test_raw_entry_range_from_iso_strings() {
        let raw: RawBusyEntry = serde_json::from_str(
            r#"{"start": "2024-11-04T07:30:00Z", "end": "2024-11-04T09:00:00Z"}"#,
        )
        .unwrap();
        let interval = BusyInterval::from_raw(&raw).unwrap();
        assert!(matches!(interval, BusyInterval::Range { .. }));
    }
}
