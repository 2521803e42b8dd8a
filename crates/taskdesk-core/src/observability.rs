use serde::{Deserialize, Serialize};

/// Point-in-time counters for a `TaskStore`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: usize,
    pub open: usize,
    pub completed: usize,
    /// Entries still held by the urgency queue, stale ones included.
    pub pending_urgent: usize,
}
