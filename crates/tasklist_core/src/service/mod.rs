//! Session orchestration and view projection.
//!
//! # Responsibility
//! - Own store, persistence adapter and filter state for one session.
//! - Hand renderers a complete, read-only projection after every change.

pub mod task_session;
pub mod view;
