//! taskdesk-core
//!
//! Core building blocks for the taskdesk tracker.
//!
//! - **domain**: ids, priority, due-date parsing, task records and views
//! - **store**: `TaskStore` and the lazily-pruned `UrgencyQueue`
//! - **app**: `SharedTaskStore`, one lock around the whole store
//! - **error**: validation / not-found taxonomy
//! - **observability**: counters

pub mod app;
pub mod domain;
pub mod error;
pub mod observability;
pub mod store;

pub use app::SharedTaskStore;
pub use domain::{Priority, Task, TaskId, TaskView};
pub use error::{ErrorKind, TaskError, ValidationError};
pub use observability::TaskCounts;
pub use store::{Completion, TaskStore};
