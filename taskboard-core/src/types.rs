use serde::{Deserialize, Serialize};

/// A single unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }
}

/// The aggregate of all lists. List order is display order.
///
/// A published `Board` is never mutated: every transition in
/// [`crate::board`] builds a new value and leaves the old one intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub lists: Vec<TaskList>,
}

/// A position reported by the drag gesture: list plus zero-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub list_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(list_id: impl Into<String>, index: usize) -> Self {
        Self {
            list_id: list_id.into(),
            index,
        }
    }
}

/// Outcome of a finished drag gesture.
/// `destination` is `None` when the card was dropped outside any list
/// or the gesture was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

/// Where a task currently lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLocation {
    pub list_id: String,
    pub list_index: usize,
    pub index: usize,
}
