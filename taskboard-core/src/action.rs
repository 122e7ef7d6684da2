/// Board actions as dispatched by a UI, a script or a test harness.
///
/// Wire shape (internally tagged):
///   { "type": "addList", "title": "Done" }
///   { "type": "addTask", "listId": "list-1", "content": "Write docs" }
///   { "type": "moveTask", "source": {...}, "destination": {...} | null }
use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::{Board, DragLocation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardAction {
    AddList {
        title: String,
    },
    #[serde(rename_all = "camelCase")]
    AddTask {
        list_id: String,
        content: String,
    },
    MoveTask {
        source: DragLocation,
        #[serde(default)]
        destination: Option<DragLocation>,
    },
}

impl BoardAction {
    pub fn name(&self) -> &'static str {
        match self {
            BoardAction::AddList { .. } => "addList",
            BoardAction::AddTask { .. } => "addTask",
            BoardAction::MoveTask { .. } => "moveTask",
        }
    }
}

/// Apply `action` to `board`, producing the next board.
/// Only `MoveTask` can fail; see [`Board::move_task`].
pub fn reduce(board: &Board, action: &BoardAction) -> Result<Board, BoardError> {
    match action {
        BoardAction::AddList { title } => Ok(board.add_list(title)),
        BoardAction::AddTask { list_id, content } => Ok(board.add_task(list_id, content)),
        BoardAction::MoveTask {
            source,
            destination,
        } => board.move_task(source, destination.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardSeed;

    fn starter() -> Board {
        Board::from_seed(&BoardSeed::default()).unwrap()
    }

    #[test]
    fn test_parse_actions() {
        let action: BoardAction =
            serde_json::from_str(r#"{"type":"addList","title":"Done"}"#).unwrap();
        assert_eq!(
            action,
            BoardAction::AddList {
                title: "Done".into()
            }
        );

        let action: BoardAction = serde_json::from_str(
            r#"{"type":"addTask","listId":"list-1","content":"Write docs"}"#,
        )
        .unwrap();
        assert_eq!(action.name(), "addTask");

        let action: BoardAction = serde_json::from_str(
            r#"{"type":"moveTask","source":{"listId":"list-1","index":0}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            BoardAction::MoveTask {
                source: DragLocation::new("list-1", 0),
                destination: None,
            }
        );
    }

    #[test]
    fn test_reduce_sequence() {
        let board = starter();
        let board = reduce(&board, &BoardAction::AddList { title: "Done".into() }).unwrap();
        let board = reduce(
            &board,
            &BoardAction::AddTask {
                list_id: "list-3".into(),
                content: "Ship".into(),
            },
        )
        .unwrap();
        let board = reduce(
            &board,
            &BoardAction::MoveTask {
                source: DragLocation::new("list-3", 0),
                destination: Some(DragLocation::new("list-1", 0)),
            },
        )
        .unwrap();

        assert_eq!(board.lists.len(), 3);
        assert_eq!(board.lists[0].tasks[0].content, "Ship");
        assert!(board.lists[2].tasks.is_empty());
        assert_eq!(board.task_count(), 3);
    }

    #[test]
    fn test_reduce_reports_invalid_move() {
        let board = starter();
        let result = reduce(
            &board,
            &BoardAction::MoveTask {
                source: DragLocation::new("nonexistent", 0),
                destination: Some(DragLocation::new("list-1", 0)),
            },
        );
        assert_eq!(result, Err(BoardError::ListNotFound("nonexistent".into())));
    }
}
