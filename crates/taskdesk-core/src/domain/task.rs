use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Priority, TaskId};

/// A tracked task.
///
/// Design:
/// - Created only by `TaskStore::create`, which assigns the id.
/// - Everything except `completed` is fixed at construction.
/// - No ordering lives here; urgency is derived by the store's key function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    due_date: NaiveDate,
    priority: Priority,
    completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, title: String, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            id,
            title,
            due_date,
            priority,
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Owned snapshot for callers outside the store.
    pub fn view(&self) -> TaskView {
        TaskView {
            id: self.id,
            title: self.title.clone(),
            due_date: self.due_date,
            priority: self.priority,
            completed: self.completed,
        }
    }
}

/// Serializable view of a Task.
///
/// `due_date` serializes as an ISO 8601 calendar date (`2025-04-20`),
/// `priority` as its number and `id` as `T<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✓" } else { "X" };
        write!(
            f,
            "{} | {} | Due: {} | Priority: {} | Done: {}",
            self.id,
            self.title,
            self.due_date.format("%Y-%m-%d"),
            self.priority,
            status
        )
    }
}
