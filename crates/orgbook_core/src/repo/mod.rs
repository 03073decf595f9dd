//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for department persistence.
//! - Isolate SQLite statement details from callers.
//!
//! # Invariants
//! - Repository APIs report row absence as `Option::None`, never as an
//!   error.
//! - Storage failures propagate through `DbError` unmodified.

pub mod department_repo;
