/// Board state machine.
///
/// Every transition borrows the current board and returns a new one. Lists
/// touched by a transition are rebuilt from fresh task vectors; the input
/// board is never modified, so anyone still holding it keeps seeing a
/// complete, consistent board.
///
/// Move index policy: the destination index is always read against the
/// source list *after* the task was removed from it. For a same-list move
/// `[A, B, C]` with `0 -> 2` this yields `[B, C, A]`.
use std::collections::HashSet;

use crate::config::BoardSeed;
use crate::error::BoardError;
use crate::ids;
use crate::types::{Board, DragLocation, DragResult, Task, TaskList, TaskLocation};

impl Board {
    pub fn new(lists: Vec<TaskList>) -> Self {
        Self { lists }
    }

    /// Build a board from configuration. Lists and tasks without an id get a
    /// generated one that avoids every id declared anywhere in the seed; the
    /// result is validated for id uniqueness.
    pub fn from_seed(seed: &BoardSeed) -> Result<Self, BoardError> {
        let mut taken_lists: HashSet<String> = seed
            .lists
            .iter()
            .filter_map(|list| list.id.clone())
            .collect();
        let mut taken_tasks: HashSet<String> = seed
            .lists
            .iter()
            .flat_map(|list| list.tasks.iter())
            .filter_map(|task| task.id.clone())
            .collect();

        let mut lists: Vec<TaskList> = Vec::with_capacity(seed.lists.len());
        for list_seed in &seed.lists {
            let id = match &list_seed.id {
                Some(id) => id.clone(),
                None => {
                    let id = ids::next_list_id_among(taken_lists.iter().map(String::as_str));
                    taken_lists.insert(id.clone());
                    id
                }
            };
            let mut list = TaskList::new(id, list_seed.title.clone());
            for task_seed in &list_seed.tasks {
                let task_id = match &task_seed.id {
                    Some(id) => id.clone(),
                    None => {
                        let id = ids::unique_task_id_where(|id| taken_tasks.contains(id));
                        taken_tasks.insert(id.clone());
                        id
                    }
                };
                list.tasks.push(Task {
                    id: task_id,
                    content: task_seed.content.clone(),
                });
            }
            lists.push(list);
        }
        let board = Board::new(lists);
        board.validate()?;
        Ok(board)
    }

    pub fn list(&self, list_id: &str) -> Option<&TaskList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    fn list_position(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    /// Total number of tasks across all lists.
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|list| list.tasks.len()).sum()
    }

    pub fn locate_task(&self, task_id: &str) -> Option<TaskLocation> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(list_index, list)| {
                list.tasks
                    .iter()
                    .position(|task| task.id == task_id)
                    .map(|index| TaskLocation {
                        list_id: list.id.clone(),
                        list_index,
                        index,
                    })
            })
    }

    /// Check that list ids are unique and that every task id occurs exactly
    /// once on the whole board.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut list_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(list.id.as_str()) {
                return Err(BoardError::DuplicateId(list.id.clone()));
            }
            for task in &list.tasks {
                if !task_ids.insert(task.id.as_str()) {
                    return Err(BoardError::DuplicateId(task.id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Append an empty list with a fresh id. Any title is accepted.
    pub fn add_list(&self, title: &str) -> Board {
        let id = ids::next_list_id(&self.lists);
        log::debug!("[taskboard.board.add_list] {} {:?}", id, title);
        let mut lists = self.lists.clone();
        lists.push(TaskList::new(id, title));
        Board::new(lists)
    }

    /// Append a task to the end of `list_id`.
    /// An unknown list is a no-op: the caller may hold a stale id.
    pub fn add_task(&self, list_id: &str, content: &str) -> Board {
        let Some(pos) = self.list_position(list_id) else {
            log::debug!(
                "[taskboard.board.add_task] Ignoring task for unknown list {}",
                list_id
            );
            return self.clone();
        };

        let task = Task {
            id: ids::unique_task_id(&self.lists),
            content: content.to_string(),
        };
        log::debug!("[taskboard.board.add_task] {} -> {}", task.id, list_id);

        let target = &self.lists[pos];
        let mut tasks = target.tasks.clone();
        tasks.push(task);

        let mut lists = self.lists.clone();
        lists[pos] = with_tasks(target, tasks);
        Board::new(lists)
    }

    /// Move the task at `source` to `destination`.
    ///
    /// A missing destination (cancelled gesture) returns the board unchanged.
    /// An unknown source/destination list or an out-of-range source index is
    /// reported as an error and nothing changes. The destination index is
    /// clamped to the length of the (post-removal) target list.
    pub fn move_task(
        &self,
        source: &DragLocation,
        destination: Option<&DragLocation>,
    ) -> Result<Board, BoardError> {
        let Some(destination) = destination else {
            log::debug!(
                "[taskboard.board.move] Gesture from {}[{}] cancelled",
                source.list_id,
                source.index
            );
            return Ok(self.clone());
        };

        let src_pos = self
            .list_position(&source.list_id)
            .ok_or_else(|| BoardError::ListNotFound(source.list_id.clone()))?;
        let src_list = &self.lists[src_pos];
        if source.index >= src_list.tasks.len() {
            return Err(BoardError::TaskIndexOutOfRange {
                list_id: source.list_id.clone(),
                index: source.index,
                len: src_list.tasks.len(),
            });
        }
        let dst_pos = self
            .list_position(&destination.list_id)
            .ok_or_else(|| BoardError::ListNotFound(destination.list_id.clone()))?;

        let mut src_tasks = src_list.tasks.clone();
        let moved = src_tasks.remove(source.index);
        log::debug!(
            "[taskboard.board.move] {} {}[{}] -> {}[{}]",
            moved.id,
            source.list_id,
            source.index,
            destination.list_id,
            destination.index
        );

        let mut lists = self.lists.clone();
        if src_pos == dst_pos {
            let at = destination.index.min(src_tasks.len());
            src_tasks.insert(at, moved);
            lists[src_pos] = with_tasks(src_list, src_tasks);
        } else {
            let dst_list = &self.lists[dst_pos];
            let mut dst_tasks = dst_list.tasks.clone();
            let at = destination.index.min(dst_tasks.len());
            dst_tasks.insert(at, moved);
            lists[src_pos] = with_tasks(src_list, src_tasks);
            lists[dst_pos] = with_tasks(dst_list, dst_tasks);
        }
        Ok(Board::new(lists))
    }

    /// Apply a finished drag gesture.
    pub fn apply_drag(&self, drag: &DragResult) -> Result<Board, BoardError> {
        self.move_task(&drag.source, drag.destination.as_ref())
    }
}

fn with_tasks(list: &TaskList, tasks: Vec<Task>) -> TaskList {
    TaskList {
        id: list.id.clone(),
        title: list.title.clone(),
        tasks,
    }
}
