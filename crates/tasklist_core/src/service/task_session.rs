//! Task session: the single context every host event handler goes through.
//!
//! # Responsibility
//! - Hydrate the store from persistence when the session opens.
//! - Route every mutation through the store, then persist synchronously.
//! - Hold the one authoritative filter selection.
//!
//! # Invariants
//! - A successful mutation is persisted before the call returns.
//! - Rejected input (blank text, cancelled edit, unknown id) writes nothing.
//! - Storage failures keep the in-memory mutation and surface as `Err`.

use crate::filter::predicate::{FilterState, StatusFilter};
use crate::model::task::{Task, TaskId};
use crate::persist::task_persistence::{PersistError, TaskPersistence};
use crate::repo::kv_repo::KeyValueStore;
use crate::service::view::ListSnapshot;
use crate::store::clock::{Clock, SystemClock};
use crate::store::task_store::TaskStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level failure.
#[derive(Debug)]
pub enum SessionError {
    Persist(PersistError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<PersistError> for SessionError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Store + persistence + filter state for one interactive session.
pub struct TaskSession<S: KeyValueStore, C: Clock = SystemClock> {
    store: TaskStore<C>,
    persistence: TaskPersistence<S>,
    filter: FilterState,
}

impl<S: KeyValueStore> TaskSession<S, SystemClock> {
    /// Opens a session over `storage` with wall-clock ids.
    pub fn open(storage: S) -> SessionResult<Self> {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskSession<S, C> {
    /// Loads the stored blob and hydrates the store.
    ///
    /// Missing or rejected data yields an empty collection.
    ///
    /// # Errors
    /// - Returns an error only when the storage backend cannot be read.
    pub fn open_with_clock(storage: S, clock: C) -> SessionResult<Self> {
        let persistence = TaskPersistence::new(storage);
        let raw = persistence.load()?;
        let store = TaskStore::hydrate_with_clock(raw.as_deref(), clock);
        info!(
            "event=session_open module=service status=ok count={} active={}",
            store.len(),
            store.active_count()
        );
        Ok(Self {
            store,
            persistence,
            filter: FilterState::default(),
        })
    }

    /// Adds a task from raw input. Blank input returns `Ok(None)`.
    pub fn add(&mut self, text: &str) -> SessionResult<Option<Task>> {
        let Some(task) = self.store.add(text).cloned() else {
            debug!("event=task_add module=service status=rejected reason=blank_text");
            return Ok(None);
        };
        info!("event=task_add module=service status=ok id={}", task.id);
        self.persist()?;
        Ok(Some(task))
    }

    /// Sets the completed flag. Returns `Ok(false)` for an unknown id.
    pub fn set_completed(&mut self, id: TaskId, value: bool) -> SessionResult<bool> {
        if !self.store.set_completed(id, value) {
            debug!("event=task_toggle module=service status=miss id={id}");
            return Ok(false);
        }
        info!("event=task_toggle module=service status=ok id={id} completed={value}");
        self.persist()?;
        Ok(true)
    }

    /// Flips the completed flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle(&mut self, id: TaskId) -> SessionResult<Option<bool>> {
        let Some(completed) = self.store.toggle(id) else {
            debug!("event=task_toggle module=service status=miss id={id}");
            return Ok(None);
        };
        info!("event=task_toggle module=service status=ok id={id} completed={completed}");
        self.persist()?;
        Ok(Some(completed))
    }

    /// Applies the answer to an edit request.
    ///
    /// `None` means the user cancelled. Returns `Ok(true)` only when the text
    /// was replaced.
    pub fn edit(&mut self, id: TaskId, replacement: Option<&str>) -> SessionResult<bool> {
        let Some(replacement) = replacement else {
            debug!("event=task_edit module=service status=cancelled id={id}");
            return Ok(false);
        };
        if !self.store.edit_text(id, replacement) {
            debug!("event=task_edit module=service status=rejected id={id}");
            return Ok(false);
        }
        info!("event=task_edit module=service status=ok id={id}");
        self.persist()?;
        Ok(true)
    }

    /// Deletes a task. Returns the removed task, or `None` for an unknown id.
    pub fn remove(&mut self, id: TaskId) -> SessionResult<Option<Task>> {
        let Some(task) = self.store.remove(id) else {
            debug!("event=task_remove module=service status=miss id={id}");
            return Ok(None);
        };
        info!("event=task_remove module=service status=ok id={id}");
        self.persist()?;
        Ok(Some(task))
    }

    /// Empties the collection and persists the empty list unconditionally.
    pub fn clear(&mut self) -> SessionResult<usize> {
        let removed = self.store.clear();
        info!("event=tasks_clear module=service status=ok removed={removed}");
        self.persist()?;
        Ok(removed)
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.set_status(status);
    }

    pub fn set_search(&mut self, search: &str) {
        self.filter.set_search(search);
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn store(&self) -> &TaskStore<C> {
        &self.store
    }

    pub fn active_count(&self) -> usize {
        self.store.active_count()
    }

    /// Projection for the renderer under the current filter.
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot::project(&self.store, &self.filter)
    }

    fn persist(&self) -> SessionResult<()> {
        self.persistence.save(self.store.tasks())?;
        Ok(())
    }
}
