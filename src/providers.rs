//! Collaborator contracts.
//!
//! The core consumes two external data sources: the time-slot catalog
//! and per-resource free/busy lists. The traits here are synchronous
//! contracts over already-fetched data — the fetch itself (transport,
//! staleness guards for superseded requests, retries) belongs to the
//! caller.
//!
//! # Failure semantics
//! No provider failure is blocking: a failed catalog fetch substitutes
//! the built-in defaults, a failed busy fetch yields an empty list, and
//! the grid degrades to a usable default state.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RawBusyEntry, TimeSlot, TimeSlotCatalog};

/// Which resource a free/busy query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// The teacher assigned to the class.
    Teacher,
    /// The room assigned to the class.
    Room,
}

/// Error category of a failed provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The backing service could not be reached or answered an error.
    Unavailable,
    /// The response arrived but could not be interpreted.
    Malformed,
}

/// A failed provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderError {
    /// Error category.
    pub kind: ProviderErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl ProviderError {
    /// Creates an error.
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Convenience constructor for unreachable backends.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, message)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProviderErrorKind::Unavailable => write!(f, "provider unavailable: {}", self.message),
            ProviderErrorKind::Malformed => write!(f, "malformed provider response: {}", self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of the reusable daily periods.
pub trait TimeSlotProvider {
    /// Lists the catalog entries. Callers recover from failure via
    /// [`catalog_or_default`].
    fn list(&self) -> Result<Vec<TimeSlot>, ProviderError>;
}

/// Source of existing commitments for a teacher or room.
pub trait BusyProvider {
    /// Fetches the busy entries of one resource within a date range.
    /// Invoked independently for the teacher and the room. Callers
    /// recover from failure via [`busy_or_empty`].
    fn free_busy(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<RawBusyEntry>, ProviderError>;
}

/// Resolves a catalog fetch, substituting the defaults on failure or an
/// empty response.
pub fn catalog_or_default(result: Result<Vec<TimeSlot>, ProviderError>) -> TimeSlotCatalog {
    match result {
        Ok(slots) => TimeSlotCatalog::from_slots(slots),
        Err(err) => {
            log::debug!("time-slot catalog fetch failed ({err}), using defaults");
            TimeSlotCatalog::default()
        }
    }
}

/// Resolves a busy fetch, substituting an empty list on failure.
pub fn busy_or_empty(result: Result<Vec<RawBusyEntry>, ProviderError>) -> Vec<RawBusyEntry> {
    match result {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("free/busy fetch failed ({err}), treating resource as free");
            Vec::new()
        }
    }
}
