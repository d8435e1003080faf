//! Core logic for the task list.
//! This crate is the single source of truth for task invariants; renderers
//! only project [`ListSnapshot`] and call back into [`TaskSession`].

pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod persist;
pub mod repo;
pub mod service;
pub mod store;

pub use filter::predicate::{visible, FilterState, ParseStatusFilterError, StatusFilter};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use persist::task_persistence::{
    PersistError, PersistResult, TaskPersistence, TASKS_STORAGE_KEY,
};
pub use repo::kv_repo::{
    KeyValueStore, MemoryKeyValueStore, RepoError, RepoResult, SqliteKeyValueStore,
};
pub use service::task_session::{SessionError, SessionResult, TaskSession};
pub use service::view::{items_left_label, ListSnapshot, TaskRow};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::task_store::{HydrateError, TaskStore};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
