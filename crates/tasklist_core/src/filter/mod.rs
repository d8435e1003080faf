//! Task visibility filtering.
//!
//! # Responsibility
//! - Hold the one authoritative status/search selection.
//! - Decide per-task visibility as a pure function.

pub mod predicate;
