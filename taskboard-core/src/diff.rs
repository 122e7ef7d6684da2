use crate::types::Board;
/// Task-level diff between two board versions.
///
/// Tasks are matched by id. Produces a list of changes: added, removed,
/// modified, moved (to another list) and reordered (same list, new slot).
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    Added {
        task_id: String,
        list_id: String,
        index: usize,
    },
    Removed {
        task_id: String,
        list_id: String,
    },
    Modified {
        task_id: String,
        old_content: String,
        new_content: String,
    },
    Moved {
        task_id: String,
        old_list: String,
        new_list: String,
        new_index: usize,
    },
    Reordered {
        task_id: String,
        list_id: String,
        old_index: usize,
        new_index: usize,
    },
}

/// Snapshot of a task's state for comparison.
#[derive(Debug, Clone)]
struct TaskSnapshot<'a> {
    list_id: &'a str,
    content: &'a str,
    index: usize,
}

fn snapshot_board(board: &Board) -> HashMap<&str, TaskSnapshot<'_>> {
    let mut map = HashMap::new();
    for list in &board.lists {
        for (index, task) in list.tasks.iter().enumerate() {
            map.insert(
                task.id.as_str(),
                TaskSnapshot {
                    list_id: &list.id,
                    content: &task.content,
                    index,
                },
            );
        }
    }
    map
}

/// Compute changes between two board versions.
///
/// Changes come out in board order of the new board (then removals in board
/// order of the old one), so renderers can apply them front to back.
pub fn diff_boards(old_board: &Board, new_board: &Board) -> Vec<TaskChange> {
    let old_snap = snapshot_board(old_board);
    let mut changes = Vec::new();

    for list in &new_board.lists {
        for (index, task) in list.tasks.iter().enumerate() {
            match old_snap.get(task.id.as_str()) {
                None => changes.push(TaskChange::Added {
                    task_id: task.id.clone(),
                    list_id: list.id.clone(),
                    index,
                }),
                Some(old) => {
                    if old.list_id != list.id {
                        changes.push(TaskChange::Moved {
                            task_id: task.id.clone(),
                            old_list: old.list_id.to_string(),
                            new_list: list.id.clone(),
                            new_index: index,
                        });
                    } else if old.index != index {
                        changes.push(TaskChange::Reordered {
                            task_id: task.id.clone(),
                            list_id: list.id.clone(),
                            old_index: old.index,
                            new_index: index,
                        });
                    }
                    if old.content != task.content {
                        changes.push(TaskChange::Modified {
                            task_id: task.id.clone(),
                            old_content: old.content.to_string(),
                            new_content: task.content.clone(),
                        });
                    }
                }
            }
        }
    }

    let new_snap = snapshot_board(new_board);
    for list in &old_board.lists {
        for task in &list.tasks {
            if !new_snap.contains_key(task.id.as_str()) {
                changes.push(TaskChange::Removed {
                    task_id: task.id.clone(),
                    list_id: list.id.clone(),
                });
            }
        }
    }

    changes
}
