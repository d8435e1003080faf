//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the single record shape owned by the task store.
//! - Keep the persisted wire shape (`id`, `text`, `completed`) stable.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` unique within its collection.
//! - Task text is never blank once a task exists.

pub mod task;
