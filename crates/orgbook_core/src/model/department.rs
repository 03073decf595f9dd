//! Department domain model.
//!
//! # Responsibility
//! - Define the canonical in-memory record mapped onto `departments` rows.
//! - Distinguish transient instances from persisted ones via `id`.
//!
//! # Invariants
//! - `id = None` means the instance has no corresponding row in storage.
//! - `id = Some(_)` corresponds to at most one row, keyed by that id.
//! - Row ids are assigned by the store on first insert and never reused.

use serde::{Deserialize, Serialize};

/// Stable row identifier assigned by SQLite on first insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DepartmentId = i64;

/// Canonical record for one row of the `departments` table.
///
/// An instance starts transient (`id = None`) and becomes persisted once a
/// save assigns it a row id. Deleting it clears the id again, so the same
/// value can re-enter storage as a new row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Row identity. `None` until the first save persists this instance.
    pub id: Option<DepartmentId>,
    /// Display name. The mapper enforces no uniqueness constraint.
    pub name: String,
    /// Physical location text, same constraints as `name`.
    pub location: String,
}

impl Department {
    /// Creates a transient department that has not been persisted yet.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    /// Returns whether this instance corresponds to a stored row.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
