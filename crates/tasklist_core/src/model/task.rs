//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record and its wire shape.
//! - Provide text normalization shared by create and edit paths.
//!
//! # Invariants
//! - `id` is the sole lookup key and never changes after creation.
//! - `text` is trimmed and non-empty.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Task identifier, derived from creation time in Unix epoch milliseconds.
pub type TaskId = i64;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Validation error for task records and collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty or whitespace-only.
    BlankText(TaskId),
    /// Two records in one collection share an id.
    DuplicateId(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText(id) => write!(f, "task {id} has blank text"),
            Self::DuplicateId(id) => write!(f, "duplicate task id {id}"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates an active task from raw user input.
    ///
    /// Returns `None` when `text` is blank after trimming.
    pub fn new(id: TaskId, text: &str) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Self {
            id,
            text,
            completed: false,
        })
    }

    /// Returns whether this task still counts toward "items left".
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Checks single-record invariants.
    ///
    /// # Errors
    /// - Returns `BlankText` when `text` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::BlankText(self.id));
        }
        Ok(())
    }
}

/// Trims user input, returning `None` for blank values.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
