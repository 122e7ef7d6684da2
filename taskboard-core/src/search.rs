use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::types::Board;

/// A search result entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHit {
    pub list_id: String,
    pub list_title: String,
    pub index: usize,
    pub task_id: String,
    pub content: String,
}

/// Find tasks whose content contains every whitespace-separated term of
/// `query`. Matching ignores case and accents. An empty query matches nothing.
pub fn search_tasks(board: &Board, query: &str) -> Vec<TaskHit> {
    let terms: Vec<String> = query.split_whitespace().map(normalize_for_search).collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for list in &board.lists {
        for (index, task) in list.tasks.iter().enumerate() {
            let haystack = normalize_for_search(&task.content);
            if terms.iter().all(|term| haystack.contains(term.as_str())) {
                hits.push(TaskHit {
                    list_id: list.id.clone(),
                    list_title: list.title.clone(),
                    index,
                    task_id: task.id.clone(),
                    content: task.content.clone(),
                });
            }
        }
    }
    hits
}

/// Lowercases, NFD-decomposes and strips combining marks, so "resume" finds
/// "Résumé".
fn normalize_for_search(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Task, TaskList};

    fn board() -> Board {
        let mut todo = TaskList::new("list-1", "To Do");
        todo.tasks.push(Task {
            id: "t1".into(),
            content: "Update Résumé".into(),
        });
        todo.tasks.push(Task {
            id: "t2".into(),
            content: "Buy groceries".into(),
        });
        let mut doing = TaskList::new("list-2", "In Progress");
        doing.tasks.push(Task {
            id: "t3".into(),
            content: "Groceries list for party".into(),
        });
        Board::new(vec![todo, doing])
    }

    #[test]
    fn test_search_folds_accents_and_case() {
        let hits = search_tasks(&board(), "RESUME");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].task_id, "t1");
        assert_eq!(hits[0].list_title, "To Do");
    }

    #[test]
    fn test_search_across_lists_in_board_order() {
        let hits = search_tasks(&board(), "groceries");
        let ids: Vec<&str> = hits.iter().map(|h| h.task_id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t3"]);
        assert_eq!(hits[1].list_id, "list-2");
        assert_eq!(hits[1].index, 0);
    }

    #[test]
    fn test_search_requires_all_terms() {
        let hits = search_tasks(&board(), "groceries party");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].task_id, "t3");
    }

    #[test]
    fn test_search_empty_query() {
        assert!(search_tasks(&board(), "   ").is_empty());
        assert!(search_tasks(&board(), "nonexistent").is_empty());
    }
}
