//! In-memory task store.
//!
//! # Responsibility
//! - Own the authoritative ordered task collection.
//! - Provide the only legal mutation entry points.
//!
//! # Invariants
//! - Iteration order is insertion order.
//! - Ids are unique across the live collection after every operation.

pub mod clock;
pub mod task_store;
