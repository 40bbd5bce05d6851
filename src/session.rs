//! Form-session facade.
//!
//! [`GridSession`] is the surface the surrounding class form talks to:
//! it owns the catalog, the week anchor, both busy indexes, the current
//! and original selections, and the policies, and exposes per-cell
//! classification plus a guarded toggle. Everything underneath is the
//! pure machinery from [`grid`](crate::grid), [`index`](crate::index)
//! and [`evaluator`](crate::evaluator).
//!
//! # Lifecycle
//! Built once when the form mounts, with the catalog and the class's
//! pre-existing schedule. Busy indexes are rebuilt through the
//! `set_*_busy` methods whenever the selected teacher or room changes
//! (each new fetch supersedes the prior data). The current selection
//! lives for the duration of the session and is read out on submit.

use chrono::NaiveDate;

use crate::evaluator::{CellState, ConflictEvaluator, DayLockPolicy, ExclusionFlags};
use crate::grid::build_week;
use crate::index::BusyIndex;
use crate::models::{RawBusyEntry, SelectionSet, SlotInstance, TimeSlotCatalog};

/// State of one class-form editing session over the weekly grid.
#[derive(Debug, Clone)]
pub struct GridSession {
    catalog: TimeSlotCatalog,
    week_anchor: NaiveDate,
    teacher_busy: BusyIndex,
    room_busy: BusyIndex,
    current: SelectionSet,
    original: SelectionSet,
    flags: ExclusionFlags,
    day_lock: DayLockPolicy,
    disabled: bool,
}

impl GridSession {
    /// Creates a session.
    ///
    /// `original` is the snapshot of the class's pre-existing schedule
    /// (empty when creating a new class); the current selection starts
    /// from it. Both exclusion flags must be stated explicitly.
    pub fn new(
        catalog: TimeSlotCatalog,
        week_anchor: NaiveDate,
        original: SelectionSet,
        flags: ExclusionFlags,
        day_lock: DayLockPolicy,
    ) -> Self {
        Self {
            catalog,
            week_anchor,
            teacher_busy: BusyIndex::empty(),
            room_busy: BusyIndex::empty(),
            current: original.clone(),
            original,
            flags,
            day_lock,
            disabled: false,
        }
    }

    /// Rebuilds the teacher's busy index from freshly fetched entries.
    pub fn set_teacher_busy(&mut self, entries: &[RawBusyEntry]) {
        self.teacher_busy = BusyIndex::build(entries, &self.catalog);
    }

    /// Rebuilds the room's busy index from freshly fetched entries.
    pub fn set_room_busy(&mut self, entries: &[RawBusyEntry]) {
        self.room_busy = BusyIndex::build(entries, &self.catalog);
    }

    /// Moves the displayed week. Selections are kept as-is; instances
    /// for the new week come from [`cells`](Self::cells).
    pub fn set_week_anchor(&mut self, anchor: NaiveDate) {
        self.week_anchor = anchor;
    }

    /// Globally enables or disables interaction.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn evaluator(&self) -> ConflictEvaluator<'_> {
        ConflictEvaluator::new(
            &self.teacher_busy,
            &self.room_busy,
            &self.current,
            &self.original,
            self.flags,
            self.day_lock,
            self.disabled,
        )
    }

    /// Classifies one cell.
    pub fn classify(&self, slot: &SlotInstance) -> CellState {
        self.evaluator().classify(slot)
    }

    /// Whether a cell currently accepts a toggle.
    pub fn is_togglable(&self, slot: &SlotInstance) -> bool {
        self.evaluator().is_togglable(slot)
    }

    /// The displayed week's full cell matrix with classifications, in
    /// rendering order.
    pub fn cells(&self) -> Vec<(SlotInstance, CellState)> {
        let grid = build_week(self.week_anchor, &self.catalog);
        self.evaluator().classify_week(&grid)
    }

    /// Applies a user click on a cell.
    ///
    /// Toggles the cell's membership in the current selection iff the
    /// cell accepts a toggle; returns whether the selection changed. A
    /// click on a locked, disabled or conflicting cell is a silent
    /// no-op.
    pub fn toggle(&mut self, slot: &SlotInstance) -> bool {
        if !self.evaluator().is_togglable(slot) {
            return false;
        }
        self.current = self.current.toggle(slot);
        true
    }

    /// The live selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.current
    }

    /// The immutable original baseline.
    pub fn original(&self) -> &SelectionSet {
        &self.original
    }

    /// Number of currently selected cells.
    pub fn selected_count(&self) -> usize {
        self.current.len()
    }

    /// The catalog driving the grid rows.
    pub fn catalog(&self) -> &TimeSlotCatalog {
        &self.catalog
    }
}
