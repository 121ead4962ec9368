//! Domain model for dog records.
//!
//! # Responsibility
//! - Define the in-memory record mapped 1:1 to a row of `dogs`.
//!
//! # Invariants
//! - A record without `id` has never been persisted.
//! - A record's `id` never changes once assigned.

pub mod dog;
