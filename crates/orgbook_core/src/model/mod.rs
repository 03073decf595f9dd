//! Domain model for OrgBook core.
//!
//! # Responsibility
//! - Define the canonical data structures used by the persistence mapper.
//!
//! # Invariants
//! - Every persisted object is identified by a store-assigned `DepartmentId`.
//! - Transient state is represented by an explicit absent id, never a
//!   sentinel value.

pub mod department;
