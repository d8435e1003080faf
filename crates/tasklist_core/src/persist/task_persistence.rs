//! Task collection save/load over a [`KeyValueStore`].
//!
//! # Invariants
//! - `save` writes the full collection as a JSON array, replacing the prior value.
//! - `load` returns the raw stored string; validation belongs to hydration.

use crate::model::task::Task;
use crate::repo::kv_repo::{KeyValueStore, RepoError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key holding the serialized task collection.
pub const TASKS_STORAGE_KEY: &str = "tasks";

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure to move the collection to or from storage.
#[derive(Debug)]
pub enum PersistError {
    Encode(serde_json::Error),
    Repo(RepoError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode tasks: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<RepoError> for PersistError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Reads and writes the task collection under [`TASKS_STORAGE_KEY`].
pub struct TaskPersistence<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> TaskPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Serializes `tasks` and replaces the stored value.
    pub fn save(&self, tasks: &[Task]) -> PersistResult<()> {
        let payload = encode_tasks(tasks)?;
        match self.storage.set(TASKS_STORAGE_KEY, &payload) {
            Ok(()) => {
                debug!(
                    "event=tasks_save module=persist status=ok count={} bytes={}",
                    tasks.len(),
                    payload.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=tasks_save module=persist status=error count={} error={}",
                    tasks.len(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Returns the stored value, or `None` when nothing was ever saved.
    pub fn load(&self) -> PersistResult<Option<String>> {
        let raw = self.storage.get(TASKS_STORAGE_KEY)?;
        debug!(
            "event=tasks_load module=persist status=ok present={}",
            raw.is_some()
        );
        Ok(raw)
    }
}

/// Encodes tasks into the persisted wire shape.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}
