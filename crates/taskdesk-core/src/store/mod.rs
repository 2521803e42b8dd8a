//! Store module: urgency queue and the in-memory task store.

mod memory;
mod urgency;

pub use memory::{Completion, TaskStore, urgency_key};
pub use urgency::UrgencyQueue;
