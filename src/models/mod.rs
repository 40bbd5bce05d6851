//! Domain models for the weekly slot grid.
//!
//! Provides the core data types: the time-slot catalog, slot instances,
//! busy intervals, selection sets, and the canonical weekday convention
//! (1 = Monday .. 7 = Sunday) used throughout the crate.

mod busy;
mod selection;
mod slot_instance;
mod time_slot;
pub mod weekday;

pub use busy::{BusyInterval, RawBusyEntry};
pub use selection::SelectionSet;
pub use slot_instance::SlotInstance;
pub use time_slot::{TimeSlot, TimeSlotCatalog};
