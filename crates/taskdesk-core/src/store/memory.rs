//! In-memory task store.
//!
//! # 構成
//! 同じタスク集合に対して 4 つのビューを持ちます。
//! - `tasks`: id -> Task（正本）
//! - `order`: 作成順
//! - `urgency`: `(priority, due_date)` の最小ヒープ（完了済みが残っていてよい）
//! - `completed`: 完了を記録した順
//!
//! `order` / `urgency` / `completed` は TaskId だけを持ち、レコード本体は
//! 常に `tasks` から引きます。
//!
//! # 入力検証
//! `create` は検証済みの値を受け取ります。文字列から作る場合は
//! `create_task` が title / 日付 / priority を検証してから `create` を呼びます。

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::UrgencyQueue;
use crate::domain::{Priority, Task, TaskId, TaskView, parse_due_date};
use crate::error::{TaskError, ValidationError};
use crate::observability::TaskCounts;

/// Urgency key: lower priority number first, then earlier due date.
pub fn urgency_key(task: &Task) -> (Priority, NaiveDate) {
    (task.priority(), task.due_date())
}

/// Returned by a successful completion so the caller can confirm it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub id: TaskId,
    pub title: String,
}

/// Owns every task and the views over them.
///
/// Design:
/// - `tasks` is the single source of truth for records.
/// - `order`, `urgency` and `completed` hold TaskIds only.
/// - `urgency` is not cleaned up on completion; `most_urgent` skips
///   completed entries when it meets them.
#[derive(Debug, Default)]
pub struct TaskStore {
    /// Identity index.
    tasks: HashMap<TaskId, Task>,

    /// Creation order.
    order: Vec<TaskId>,

    /// Urgency structure (may hold completed tasks).
    urgency: UrgencyQueue<(Priority, NaiveDate), TaskId>,

    /// Completion order. A task completed twice appears twice.
    completed: Vec<TaskId>,

    /// Last TaskId handed out (0 = none yet).
    last_task_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_task_id(&mut self) -> TaskId {
        self.last_task_id += 1;
        TaskId::new(self.last_task_id)
    }

    /// Create a task from already validated input.
    pub fn create(&mut self, title: String, due_date: NaiveDate, priority: Priority) -> TaskId {
        let id = self.allocate_task_id();
        let task = Task::new(id, title, due_date, priority);

        self.urgency.push(urgency_key(&task), id);
        self.order.push(id);
        self.tasks.insert(id, task);

        debug!(task_id = %id, %priority, %due_date, "task created");
        id
    }

    /// Mark a task complete and record it in completion order.
    ///
    /// Completing an already completed task succeeds again and appends it to
    /// the completion list a second time.
    pub fn complete(&mut self, id: TaskId) -> Result<&Task, TaskError> {
        let Some(task) = self.tasks.get_mut(&id) else {
            return Err(TaskError::NotFound(id.to_string()));
        };

        if task.is_completed() {
            warn!(task_id = %id, "task completed again, recording a duplicate entry");
        }
        task.mark_completed();
        self.completed.push(id);
        debug!(task_id = %id, "task completed");

        Ok(&self.tasks[&id])
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// All tasks in creation order.
    pub fn list_all(&self) -> impl Iterator<Item = &Task> + '_ {
        self.order.iter().map(|id| &self.tasks[id])
    }

    /// Completed tasks in the order their completion was recorded.
    pub fn list_completed(&self) -> impl Iterator<Item = &Task> + '_ {
        self.completed.iter().map(|id| &self.tasks[id])
    }

    /// Take the most urgent incomplete task off the urgency queue.
    ///
    /// Completed entries met on the way are discarded. The returned task is
    /// consumed too: it will not be returned again, even if it stays open.
    pub fn most_urgent(&mut self) -> Option<&Task> {
        let tasks = &self.tasks;
        let id = self.urgency.pop_first_live(|id| {
            let live = tasks.get(id).is_some_and(|task| !task.is_completed());
            if !live {
                trace!(task_id = %id, "dropping completed task from urgency queue");
            }
            live
        })?;
        self.tasks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.values().filter(|t| t.is_completed()).count();
        TaskCounts {
            total: self.tasks.len(),
            open: self.tasks.len() - completed,
            completed,
            pending_urgent: self.urgency.len(),
        }
    }
}

// Caller-facing operations taking raw text, returning owned views.
impl TaskStore {
    /// Validate raw input and create a task.
    pub fn create_task(
        &mut self,
        title: &str,
        due_date_text: &str,
        priority: i64,
    ) -> Result<TaskId, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let due_date = parse_due_date(due_date_text)?;
        let priority = Priority::try_from(priority)?;

        Ok(self.create(title.to_string(), due_date, priority))
    }

    /// Complete by id text. Text that is not a valid id is simply unknown.
    pub fn complete_task(&mut self, id: &str) -> Result<Completion, TaskError> {
        let task_id = id
            .parse::<TaskId>()
            .map_err(|_| TaskError::NotFound(id.trim().to_string()))?;
        let task = self.complete(task_id)?;
        Ok(Completion {
            id: task.id(),
            title: task.title().to_string(),
        })
    }

    pub fn list_all_tasks(&self) -> Vec<TaskView> {
        self.list_all().map(Task::view).collect()
    }

    pub fn list_completed_tasks(&self) -> Vec<TaskView> {
        self.list_completed().map(Task::view).collect()
    }

    pub fn most_urgent_task(&mut self) -> Option<TaskView> {
        self.most_urgent().map(Task::view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(views: &[TaskView]) -> Vec<String> {
        views.iter().map(|v| v.id.to_string()).collect()
    }

    #[test]
    fn ids_are_sequential_and_distinct() {
        let mut store = TaskStore::new();
        let a = store.create("a".into(), ymd(2025, 1, 1), Priority::Low);
        let b = store.create("b".into(), ymd(2025, 1, 1), Priority::Low);
        let c = store.create("c".into(), ymd(2025, 1, 1), Priority::Low);

        assert_eq!([a, b, c].map(|id| id.to_string()), ["T1", "T2", "T3"]);
        assert!(a < b && b < c);
    }

    #[test]
    fn list_all_keeps_creation_order_regardless_of_urgency() {
        let mut store = TaskStore::new();
        store.create_task("low", "2025-05-01", 3).unwrap();
        store.create_task("high", "2025-04-01", 1).unwrap();
        store.create_task("medium", "2025-04-15", 2).unwrap();

        let all = store.list_all_tasks();
        assert_eq!(all.len(), 3);
        assert_eq!(ids(&all), ["T1", "T2", "T3"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn complete_sets_flag_and_records_order() {
        let mut store = TaskStore::new();
        store.create_task("one", "2025-04-20", 2).unwrap();
        store.create_task("two", "2025-04-21", 2).unwrap();

        let done = store.complete_task("T2").unwrap();
        assert_eq!(done.title, "two");
        store.complete_task("T1").unwrap();

        assert_eq!(ids(&store.list_completed_tasks()), ["T2", "T1"]);
        assert!(store.list_all_tasks().iter().all(|v| v.completed));
    }

    #[test]
    fn completing_twice_appends_twice() {
        let mut store = TaskStore::new();
        let id = store.create("again".into(), ymd(2025, 4, 20), Priority::High);

        store.complete(id).unwrap();
        store.complete(id).unwrap();

        assert_eq!(ids(&store.list_completed_tasks()), ["T1", "T1"]);
        assert_eq!(store.counts().completed, 1);
    }

    #[rstest]
    #[case::unknown("T99")]
    #[case::malformed("banana")]
    #[case::empty("")]
    fn complete_unknown_id_is_not_found_and_changes_nothing(#[case] input: &str) {
        let mut store = TaskStore::new();
        store.create_task("keep", "2025-04-20", 1).unwrap();
        let all_before = store.list_all_tasks();

        let err = store.complete_task(input).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(store.list_all_tasks(), all_before);
        assert!(store.list_completed_tasks().is_empty());
    }

    #[test]
    fn zero_padded_id_does_not_alias_an_issued_one() {
        let mut store = TaskStore::new();
        store.create_task("Write report", "2025-04-20", 2).unwrap();

        assert_eq!(
            store.complete_task("T01"),
            Err(TaskError::NotFound("T01".to_string()))
        );
        assert!(store.list_completed_tasks().is_empty());
        assert!(!store.list_all_tasks()[0].completed);
    }

    #[test]
    fn complete_on_empty_store_is_not_found() {
        let mut store = TaskStore::new();
        assert_eq!(
            store.complete_task("T99"),
            Err(TaskError::NotFound("T99".to_string()))
        );
        assert!(store.list_all_tasks().is_empty());
        assert!(store.is_empty());
    }

    #[rstest]
    #[case::empty_title("", "2025-04-20", 1, ValidationError::EmptyTitle)]
    #[case::blank_title("   ", "2025-04-20", 1, ValidationError::EmptyTitle)]
    #[case::bad_date("x", "tomorrow", 1, ValidationError::InvalidDate("tomorrow".into()))]
    #[case::priority_zero("x", "2025-04-20", 0, ValidationError::InvalidPriority(0))]
    #[case::priority_four("x", "2025-04-20", 4, ValidationError::InvalidPriority(4))]
    fn create_task_rejects_invalid_input(
        #[case] title: &str,
        #[case] date: &str,
        #[case] priority: i64,
        #[case] expected: ValidationError,
    ) {
        let mut store = TaskStore::new();
        assert_eq!(store.create_task(title, date, priority), Err(expected));
        assert!(store.is_empty());
        assert_eq!(store.counts().pending_urgent, 0);
    }

    #[test]
    fn rejected_create_does_not_burn_an_id() {
        let mut store = TaskStore::new();
        store.create_task("x", "nope", 1).unwrap_err();
        let id = store.create_task("ok", "2025-04-20", 1).unwrap();
        assert_eq!(id.to_string(), "T1");
    }

    #[test]
    fn create_task_normalizes_us_dates() {
        let mut store = TaskStore::new();
        let id = store.create_task("  Pay rent ", "4/1/25", 1).unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.due_date(), ymd(2025, 4, 1));
        assert_eq!(task.title(), "Pay rent");
    }

    #[test]
    fn most_urgent_orders_by_priority_then_date() {
        let mut store = TaskStore::new();
        store.create_task("p2 early", "2025-01-01", 2).unwrap();
        store.create_task("p1 late", "2025-12-31", 1).unwrap();
        store.create_task("p1 early", "2025-06-01", 1).unwrap();

        let order: Vec<String> = std::iter::from_fn(|| store.most_urgent_task())
            .map(|v| v.title)
            .collect();
        assert_eq!(order, ["p1 early", "p1 late", "p2 early"]);
    }

    #[test]
    fn most_urgent_consumes_returned_task() {
        let mut store = TaskStore::new();
        let t1 = store.create_task("Write report", "2025-04-20", 2).unwrap();
        let t2 = store.create_task("Fix printer", "2025-04-18", 1).unwrap();

        assert_eq!(store.most_urgent_task().map(|v| v.id), Some(t2));
        assert_eq!(store.most_urgent_task().map(|v| v.id), Some(t1));
        assert_eq!(store.most_urgent_task(), None);

        // still open, still listed
        assert!(store.list_all_tasks().iter().all(|v| !v.completed));

        let done = store.complete_task("T1").unwrap();
        assert_eq!(done.title, "Write report");
        assert_eq!(ids(&store.list_completed_tasks()), ["T1"]);
    }

    #[test]
    fn most_urgent_skips_and_drops_completed_tasks() {
        let mut store = TaskStore::new();
        let urgent = store.create("urgent".into(), ymd(2025, 4, 1), Priority::High);
        let later = store.create("later".into(), ymd(2025, 4, 2), Priority::Low);
        store.complete(urgent).unwrap();

        assert_eq!(store.counts().pending_urgent, 2);
        assert_eq!(store.most_urgent().map(Task::id), Some(later));
        assert_eq!(store.counts().pending_urgent, 0);
    }

    #[test]
    fn most_urgent_is_none_when_only_completed_remain() {
        let mut store = TaskStore::new();
        let id = store.create("done".into(), ymd(2025, 4, 1), Priority::High);
        store.complete(id).unwrap();

        assert!(store.most_urgent().is_none());
        assert!(store.most_urgent().is_none());
    }

    #[test]
    fn freshly_created_high_priority_task_is_most_urgent() {
        let mut store = TaskStore::new();
        store.create_task("meh", "2025-04-01", 3).unwrap();
        let id = store.create_task("now", "2025-05-01", 1).unwrap();

        assert_eq!(store.most_urgent_task().map(|v| v.id), Some(id));
    }

    #[test]
    fn counts_track_open_and_completed() {
        let mut store = TaskStore::new();
        store.create_task("a", "2025-04-01", 1).unwrap();
        store.create_task("b", "2025-04-02", 2).unwrap();
        store.complete_task("T1").unwrap();

        assert_eq!(
            store.counts(),
            TaskCounts {
                total: 2,
                open: 1,
                completed: 1,
                pending_urgent: 2,
            }
        );
    }
}
