//! Weekly time-slot scheduling and conflict detection for class forms.
//!
//! Implements the decision core used when an administrator creates or
//! edits a class with a recurring weekly schedule: which grid cells are
//! selectable, which collide with the assigned teacher's or room's
//! existing commitments, how a class's own prior schedule is excluded
//! from conflicting with itself during edits, and the optional rule that
//! the first chosen session must fall on the class's start weekday.
//!
//! All computation is synchronous and side-effect free; data arrives
//! through the collaborator contracts in [`providers`] and results go
//! back to the caller as per-cell [`CellState`](evaluator::CellState)
//! classifications. Rendering, transport and persistence live outside
//! this crate.
//!
//! # Modules
//!
//! - **`models`**: `TimeSlot`/`TimeSlotCatalog`, `SlotInstance`,
//!   `BusyInterval`, `SelectionSet`, canonical weekday conversion
//! - **`grid`**: Monday-aligned week dates and the slot-instance matrix
//! - **`index`**: per-resource `BusyIndex` (key set + overlap fallback)
//! - **`evaluator`**: `ConflictEvaluator`, `DayLockPolicy`, `CellState`
//! - **`session`**: `GridSession`, the facade the surrounding form uses
//! - **`providers`**: collaborator contracts and fetch-failure recovery

pub mod evaluator;
pub mod grid;
pub mod index;
pub mod models;
pub mod providers;
pub mod session;
