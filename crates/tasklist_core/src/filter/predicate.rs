//! Status + search visibility predicate.
//!
//! # Invariants
//! - `visible` is pure: same inputs, same answer, no state between calls.
//! - Final visibility is status match AND search match.
//! - Search is a case-insensitive substring test; blank search matches all.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which tasks a status filter keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    /// Only tasks with `completed == false`.
    #[serde(alias = "pending")]
    Active,
    /// Only tasks with `completed == true`.
    Completed,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns whether `task` passes the status part of the filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status filter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusFilterError(String);

impl Display for ParseStatusFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported status filter `{}`; expected all|active|pending|completed",
            self.0
        )
    }
}

impl Error for ParseStatusFilterError {}

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    /// Accepts `pending` as the dropdown spelling of `active`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" | "pending" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseStatusFilterError(other.to_string())),
        }
    }
}

/// Authoritative filter selection shared by every filter widget.
///
/// Search text is stored already trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    status: StatusFilter,
    search: String,
}

impl FilterState {
    pub fn new(status: StatusFilter, search: &str) -> Self {
        Self {
            status,
            search: normalize_search(search),
        }
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    /// Normalized search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = normalize_search(search);
    }

    /// Applies this selection to one task.
    pub fn is_visible(&self, task: &Task) -> bool {
        self.status.matches(task) && search_matches(task, &self.search)
    }
}

/// Decides whether `task` is shown for the given status and raw search text.
pub fn visible(task: &Task, status: StatusFilter, search_text: &str) -> bool {
    status.matches(task) && search_matches(task, &normalize_search(search_text))
}

fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn search_matches(task: &Task, normalized_search: &str) -> bool {
    normalized_search.is_empty() || task.text.to_lowercase().contains(normalized_search)
}
