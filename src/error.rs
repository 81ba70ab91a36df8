use thiserror::Error;

/// All possible errors in the to-do list
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Task #{0} not found")]
    TaskNotFound(i64),

    #[error("Invalid priority: {0} (expected low, medium or high)")]
    InvalidPriority(String),

    #[error("Invalid due date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("No task ids left. Clear the list's saved data to start over.")]
    IdsExhausted,

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
