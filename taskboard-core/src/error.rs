/// Error types for board transitions, the form builder and configuration.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Task index {index} out of range for list {list_id} ({len} tasks)")]
    TaskIndexOutOfRange {
        list_id: String,
        index: usize,
        len: usize,
    },

    #[error("Duplicate id on board: {0}")]
    DuplicateId(String),
}

impl BoardError {
    /// True for errors caused by a stale or invalid list/task reference.
    pub fn is_reference_not_found(&self) -> bool {
        matches!(
            self,
            BoardError::ListNotFound(_) | BoardError::TaskIndexOutOfRange { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown field type: {0:?} (expected Text, Dropdown or Radio)")]
    UnknownFieldKind(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid board seed: {0}")]
    Seed(#[from] BoardError),
}
