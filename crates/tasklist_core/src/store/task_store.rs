//! Task store: the authoritative ordered collection.
//!
//! # Responsibility
//! - Hydrate the collection from a previously persisted blob.
//! - Apply add/edit/toggle/remove/clear mutations by id.
//! - Answer the "items left" count.
//!
//! # Invariants
//! - Append-only ordering; no operation reorders tasks.
//! - Ids are unique; new ids are `max(now_ms, max_existing_id + 1)`, falling
//!   back to a free id below the minimum when the maximum is `i64::MAX`.
//! - Blank text is rejected on add and ignored on edit.
//! - Id misses are silent no-ops.

use crate::model::task::{normalize_text, Task, TaskId, TaskValidationError};
use crate::store::clock::{Clock, SystemClock};
use log::warn;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a persisted blob was not accepted by [`TaskStore::try_hydrate`].
#[derive(Debug)]
pub enum HydrateError {
    /// Blob is not a JSON array of `{id, text, completed}` records.
    Decode(serde_json::Error),
    /// Blob decoded but breaks a collection invariant.
    Invalid(TaskValidationError),
}

impl Display for HydrateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "stored tasks are not decodable: {err}"),
            Self::Invalid(err) => write!(f, "stored tasks are invalid: {err}"),
        }
    }
}

impl Error for HydrateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for HydrateError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<TaskValidationError> for HydrateError {
    fn from(value: TaskValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Ordered in-memory task collection.
#[derive(Debug)]
pub struct TaskStore<C: Clock = SystemClock> {
    tasks: Vec<Task>,
    clock: C,
}

impl TaskStore<SystemClock> {
    /// Creates an empty store using wall-clock ids.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Hydrates from a persisted blob, falling back to empty on any mismatch.
    pub fn hydrate(raw: Option<&str>) -> Self {
        Self::hydrate_with_clock(raw, SystemClock)
    }

    /// Hydrates from a persisted blob, reporting why it was rejected.
    pub fn try_hydrate(raw: Option<&str>) -> Result<Self, HydrateError> {
        Self::try_hydrate_with_clock(raw, SystemClock)
    }
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty store with a caller-provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    /// Same as [`TaskStore::hydrate`] with a caller-provided clock.
    ///
    /// A rejected blob is discarded as a whole and logged; it never fails.
    pub fn hydrate_with_clock(raw: Option<&str>, clock: C) -> Self {
        match decode_tasks(raw) {
            Ok(tasks) => Self { tasks, clock },
            Err(err) => {
                warn!(
                    "event=tasks_hydrate module=store status=discarded error={}",
                    err
                );
                Self::with_clock(clock)
            }
        }
    }

    /// Same as [`TaskStore::try_hydrate`] with a caller-provided clock.
    ///
    /// # Errors
    /// - `Decode` when the blob is not an array of task records.
    /// - `Invalid` when ids repeat or any text is blank.
    pub fn try_hydrate_with_clock(raw: Option<&str>, clock: C) -> Result<Self, HydrateError> {
        let tasks = decode_tasks(raw)?;
        Ok(Self { tasks, clock })
    }

    /// Appends a new active task with trimmed text.
    ///
    /// Returns `None` and leaves the collection untouched for blank input.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let task = Task::new(self.next_id(), text)?;
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Sets the completed flag. Returns `false` when `id` is unknown.
    pub fn set_completed(&mut self, id: TaskId, value: bool) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = value;
                true
            }
            None => false,
        }
    }

    /// Flips the completed flag, returning the new value.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Replaces task text in place.
    ///
    /// Returns `false` when `new_text` is blank or `id` is unknown; the prior
    /// text is retained in both cases.
    pub fn edit_text(&mut self, id: TaskId, new_text: &str) -> bool {
        let Some(text) = normalize_text(new_text) else {
            return false;
        };
        match self.get_mut(id) {
            Some(task) => {
                task.text = text;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the task with `id`.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Empties the collection, returning how many tasks were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        removed
    }

    /// Number of tasks with `completed == false`.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_active()).count()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn next_id(&self) -> TaskId {
        let now = self.clock.now_millis();
        let Some(max_id) = self.tasks.iter().map(|task| task.id).max() else {
            return now;
        };
        if max_id < now {
            return now;
        }
        if let Some(id) = max_id.checked_add(1) {
            return id;
        }
        // `i64::MAX` is taken: continue below the smallest id, then fill a gap.
        let min_id = self.tasks.iter().map(|task| task.id).min().unwrap_or(max_id);
        if let Some(id) = min_id.checked_sub(1) {
            return id;
        }
        let mut ids: Vec<TaskId> = self.tasks.iter().map(|task| task.id).collect();
        ids.sort_unstable();
        ids.windows(2)
            .find(|pair| pair[1].abs_diff(pair[0]) > 1)
            .map_or(now, |pair| pair[0] + 1)
    }
}

impl<'a, C: Clock> IntoIterator for &'a TaskStore<C> {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Checks collection-level invariants: unique ids and non-blank text.
fn validate_tasks(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        task.validate()?;
        if !seen.insert(task.id) {
            return Err(TaskValidationError::DuplicateId(task.id));
        }
    }
    Ok(())
}

fn decode_tasks(raw: Option<&str>) -> Result<Vec<Task>, HydrateError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Vec::new());
    };
    let tasks: Vec<Task> = serde_json::from_str(raw)?;
    validate_tasks(&tasks)?;
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::{HydrateError, TaskStore};
    use crate::model::task::TaskValidationError;
    use crate::store::clock::FixedClock;

    #[test]
    fn add_uses_clock_time_as_id() {
        let mut store = TaskStore::with_clock(FixedClock::new(1_700_000_000_000));
        let task = store.add("Buy milk").expect("task created");
        assert_eq!(task.id, 1_700_000_000_000);
    }

    #[test]
    fn add_within_same_millisecond_bumps_id() {
        let mut store = TaskStore::with_clock(FixedClock::new(500));
        let first = store.add("a").expect("created").id;
        let second = store.add("b").expect("created").id;
        assert_eq!(first, 500);
        assert_eq!(second, 501);
    }

    #[test]
    fn add_after_clock_moves_backwards_stays_unique() {
        let clock = FixedClock::new(1_000);
        let mut store = TaskStore::with_clock(&clock);
        store.add("a");
        clock.set(10);
        let id = store.add("b").expect("created").id;
        assert_eq!(id, 1_001);
    }

    #[test]
    fn toggle_flips_and_misses_are_silent() {
        let mut store = TaskStore::with_clock(FixedClock::new(1));
        let id = store.add("x").expect("created").id;
        assert_eq!(store.toggle(id), Some(true));
        assert_eq!(store.toggle(id), Some(false));
        assert_eq!(store.toggle(id + 99), None);
    }

    #[test]
    fn try_hydrate_reports_duplicate_ids() {
        let raw = r#"[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":true}]"#;
        let err = TaskStore::try_hydrate(Some(raw)).unwrap_err();
        assert!(matches!(
            err,
            HydrateError::Invalid(TaskValidationError::DuplicateId(1))
        ));
    }

    #[test]
    fn try_hydrate_reports_decode_errors() {
        let err = TaskStore::try_hydrate(Some("{not json")).unwrap_err();
        assert!(matches!(err, HydrateError::Decode(_)));
    }

    #[test]
    fn hydrate_ignores_unknown_fields() {
        let raw = r#"[{"id":4,"text":"keep","completed":true,"color":"red"}]"#;
        let store = TaskStore::hydrate(Some(raw));
        assert_eq!(store.len(), 1);
        assert!(store.get(4).expect("hydrated").completed);
    }
}
