//! Cell classification and toggle rules.
//!
//! Combines busy lookups, the current and original selections, the
//! self-occupancy exclusion flags, and the day-lock policy into one
//! classification per grid cell, evaluated in a fixed priority order:
//!
//! 1. locked (day-lock active, nothing selected on the anchor weekday)
//! 2. selected (tagged original when also in the baseline)
//! 3. teacher-busy
//! 4. room-busy
//! 5. free
//!
//! When a non-original cell is busy for both resources, teacher-busy is
//! reported and the room conflict is suppressed. That mirrors the
//! long-standing display behavior of the surrounding form and is kept
//! deliberately.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::index::BusyIndex;
use crate::models::weekday::weekday_of;
use crate::models::{SelectionSet, SlotInstance};

/// Classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Day-lock policy forbids selecting this day before the anchor day.
    Locked,
    /// Part of the current selection. `original` tags cells that also
    /// belong to the class's pre-existing schedule (cosmetic only).
    Selected { original: bool },
    /// The assigned teacher already has a commitment here.
    TeacherBusy,
    /// The assigned room already has a commitment here.
    RoomBusy,
    /// Nothing prevents selection.
    Free,
}

/// Self-occupancy exclusion, per resource.
///
/// Both flags are explicit and independent because they genuinely differ
/// mid-edit: keeping the class's teacher but moving it to a new room must
/// exclude the class's own occupancy from the teacher's busy set while
/// still evaluating the new room's availability from scratch. Callers
/// state both intents; neither flag has a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionFlags {
    /// Exclude the original baseline from the teacher's busy set.
    pub exclude_original_from_teacher_busy: bool,
    /// Exclude the original baseline from the room's busy set.
    pub exclude_original_from_room_busy: bool,
}

/// Rule forcing the first chosen session onto the class's start weekday.
///
/// While the policy is active and no current selection falls on the
/// anchor weekday, every other day is locked. The anchor day itself is
/// never locked, and all days unlock once the anchor day has a
/// selection. Removing the last anchor-day selection re-locks the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLockPolicy {
    enabled: bool,
    anchor_weekday: Option<u8>,
}

impl DayLockPolicy {
    /// A policy that never locks anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            anchor_weekday: None,
        }
    }

    /// Derives the policy from the class's declared start date.
    ///
    /// With `require_start_day_first` false, or no start date, the
    /// policy never locks.
    pub fn from_start_date(require_start_day_first: bool, start_date: Option<NaiveDate>) -> Self {
        Self {
            enabled: require_start_day_first,
            anchor_weekday: start_date.map(weekday_of),
        }
    }

    /// The canonical weekday the first session must fall on, if any.
    pub fn anchor_weekday(&self) -> Option<u8> {
        self.anchor_weekday
    }

    /// Whether cells on `day_of_week` are locked given the current
    /// selection.
    pub fn locks(&self, day_of_week: u8, current: &SelectionSet) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(anchor) = self.anchor_weekday else {
            return false;
        };
        day_of_week != anchor && !current.has_day(anchor)
    }
}

/// Classifies grid cells against busy data, selections and policies.
///
/// Borrows everything it evaluates; build one per evaluation pass. The
/// surrounding form typically goes through
/// [`GridSession`](crate::session::GridSession) instead of using this
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct ConflictEvaluator<'a> {
    teacher_busy: &'a BusyIndex,
    room_busy: &'a BusyIndex,
    current: &'a SelectionSet,
    original: &'a SelectionSet,
    flags: ExclusionFlags,
    day_lock: DayLockPolicy,
    disabled: bool,
}

impl<'a> ConflictEvaluator<'a> {
    /// Creates an evaluator over the given state.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        teacher_busy: &'a BusyIndex,
        room_busy: &'a BusyIndex,
        current: &'a SelectionSet,
        original: &'a SelectionSet,
        flags: ExclusionFlags,
        day_lock: DayLockPolicy,
        disabled: bool,
    ) -> Self {
        Self {
            teacher_busy,
            room_busy,
            current,
            original,
            flags,
            day_lock,
            disabled,
        }
    }

    /// Teacher conflict for this cell, after self-occupancy exclusion.
    fn teacher_conflict(&self, slot: &SlotInstance) -> bool {
        self.teacher_busy.is_busy(slot)
            && !(self.flags.exclude_original_from_teacher_busy && self.original.contains(slot))
    }

    /// Room conflict for this cell, after self-occupancy exclusion.
    fn room_conflict(&self, slot: &SlotInstance) -> bool {
        self.room_busy.is_busy(slot)
            && !(self.flags.exclude_original_from_room_busy && self.original.contains(slot))
    }

    /// Classifies one cell.
    pub fn classify(&self, slot: &SlotInstance) -> CellState {
        if self.day_lock.locks(slot.day_of_week, self.current) {
            return CellState::Locked;
        }
        if self.current.contains(slot) {
            return CellState::Selected {
                original: self.original.contains(slot),
            };
        }
        if self.teacher_conflict(slot) {
            return CellState::TeacherBusy;
        }
        if self.room_conflict(slot) {
            return CellState::RoomBusy;
        }
        CellState::Free
    }

    /// Whether the cell accepts a toggle.
    ///
    /// A cell is togglable iff the grid is not disabled, the cell is not
    /// locked, and it either belongs to the class's own prior schedule or
    /// carries no conflict. Cells from the original baseline therefore
    /// stay re-togglable even when they would otherwise read as busy,
    /// while genuinely new conflicting cells reject selection.
    pub fn is_togglable(&self, slot: &SlotInstance) -> bool {
        if self.disabled {
            return false;
        }
        if self.day_lock.locks(slot.day_of_week, self.current) {
            return false;
        }
        self.original.contains(slot)
            || (!self.teacher_conflict(slot) && !self.room_conflict(slot))
    }

    /// Classifies a whole week grid, preserving cell order.
    pub fn classify_week(&self, cells: &[SlotInstance]) -> Vec<(SlotInstance, CellState)> {
        cells
            .iter()
            .map(|c| (c.clone(), self.classify(c)))
            .collect()
    }
}
