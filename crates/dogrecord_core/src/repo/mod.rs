//! Active-record persistence for dog records.
//!
//! # Responsibility
//! - Own the `dogs` table lifecycle and every SQL statement touching it.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Absence of a row is `None`, never an error.
//! - Storage faults propagate unchanged inside `DbError::Sqlite`.

pub mod dog_repo;
