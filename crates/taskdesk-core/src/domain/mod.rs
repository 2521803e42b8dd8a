//! Domain model (ids, priority, due dates, task records).

pub mod due_date;
pub mod ids;
pub mod priority;
pub mod task;

pub use due_date::parse_due_date;
pub use ids::{ParseTaskIdError, TaskId};
pub use priority::Priority;
pub use task::{Task, TaskView};
