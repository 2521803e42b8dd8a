use thiserror::Error;

/// Input rejected before a Task is constructed.
///
/// These are always recoverable: the caller re-prompts and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("invalid date {0:?}, expected YYYY-MM-DD, MM/DD/YY or MM/DD/YYYY")]
    InvalidDate(String),

    #[error("invalid priority {0}, expected 1, 2 or 3")]
    InvalidPriority(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("task id not found: {0}")]
    NotFound(String),
}

/// Coarse classification used by callers to pick how to report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; ask again.
    Validation,
    /// Unknown id; warn, nothing changed.
    NotFound,
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Validation(_) => ErrorKind::Validation,
            TaskError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
