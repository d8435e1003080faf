//! Read-only projection consumed by renderers.
//!
//! Renderers never hold state of their own: every row, its visibility and
//! the "items left" counter are recomputed from the store and filter.

use crate::filter::predicate::{FilterState, StatusFilter};
use crate::model::task::{Task, TaskId};

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Result of the filter predicate for this task.
    pub visible: bool,
}

/// Full list state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// Every task in insertion order, hidden ones included.
    pub rows: Vec<TaskRow>,
    pub active_count: usize,
    pub status: StatusFilter,
    /// Normalized search text.
    pub search: String,
}

impl ListSnapshot {
    /// Builds the projection of `tasks` under `filter`.
    pub fn project<'a>(tasks: impl IntoIterator<Item = &'a Task>, filter: &FilterState) -> Self {
        let mut active_count = 0;
        let rows = tasks
            .into_iter()
            .map(|task| {
                if task.is_active() {
                    active_count += 1;
                }
                TaskRow {
                    id: task.id,
                    text: task.text.clone(),
                    completed: task.completed,
                    visible: filter.is_visible(task),
                }
            })
            .collect();

        Self {
            rows,
            active_count,
            status: filter.status(),
            search: filter.search().to_string(),
        }
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &TaskRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    pub fn items_left_label(&self) -> String {
        items_left_label(self.active_count)
    }
}

/// Counter text shown under the list.
pub fn items_left_label(active_count: usize) -> String {
    format!("{active_count} items left")
}

#[cfg(test)]
mod tests {
    use super::{items_left_label, ListSnapshot};
    use crate::filter::predicate::{FilterState, StatusFilter};
    use crate::model::task::Task;

    #[test]
    fn projection_keeps_hidden_rows_and_counts_active() {
        let tasks = vec![
            Task {
                id: 1,
                text: "Buy milk".to_string(),
                completed: false,
            },
            Task {
                id: 2,
                text: "Walk dog".to_string(),
                completed: true,
            },
        ];
        let filter = FilterState::new(StatusFilter::Completed, "");

        let snapshot = ListSnapshot::project(&tasks, &filter);

        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.active_count, 1);
        let visible: Vec<_> = snapshot.visible_rows().map(|row| row.id).collect();
        assert_eq!(visible, vec![2]);
        assert_eq!(snapshot.status, StatusFilter::Completed);
    }

    #[test]
    fn items_left_label_matches_counter_text() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(3), "3 items left");
    }
}
