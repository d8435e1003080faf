//! Persistence adapter for the task collection.
//!
//! # Responsibility
//! - Serialize the whole ordered collection into one key-value slot.
//! - Read the slot back verbatim for hydration.
//!
//! # Invariants
//! - One fixed key; no partial updates, no versioning.

pub mod task_persistence;
