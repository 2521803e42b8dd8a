//! Shared handle for multi-threaded hosts.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{TaskId, TaskView};
use crate::error::{TaskError, ValidationError};
use crate::observability::TaskCounts;
use crate::store::{Completion, TaskStore};

/// Cloneable handle to one `TaskStore`.
///
/// Every operation takes the single store lock for its whole duration, so
/// each call is atomic with respect to the others. There is no finer-grained
/// locking.
#[derive(Clone, Default)]
pub struct SharedTaskStore {
    state: Arc<Mutex<TaskStore>>,
}

impl SharedTaskStore {
    pub fn new(store: TaskStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn create_task(
        &self,
        title: &str,
        due_date_text: &str,
        priority: i64,
    ) -> Result<TaskId, ValidationError> {
        let mut state = self.state.lock().await;
        state.create_task(title, due_date_text, priority)
    }

    pub async fn complete_task(&self, id: &str) -> Result<Completion, TaskError> {
        let mut state = self.state.lock().await;
        state.complete_task(id)
    }

    pub async fn list_all_tasks(&self) -> Vec<TaskView> {
        let state = self.state.lock().await;
        state.list_all_tasks()
    }

    pub async fn list_completed_tasks(&self) -> Vec<TaskView> {
        let state = self.state.lock().await;
        state.list_completed_tasks()
    }

    pub async fn most_urgent_task(&self) -> Option<TaskView> {
        let mut state = self.state.lock().await;
        state.most_urgent_task()
    }

    pub async fn counts(&self) -> TaskCounts {
        let state = self.state.lock().await;
        state.counts()
    }
}
