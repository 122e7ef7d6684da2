/// Identifier generation for lists and tasks.
///
/// List ids follow `list-N` so they read naturally next to seeded boards.
/// Task ids combine a process-wide counter with a millisecond timestamp, so
/// two tasks created in the same instant still get distinct ids.
use regex::Regex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use crate::types::TaskList;

static LIST_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^list-(\d+)$").unwrap());

static NEXT_TASK_SEQ: AtomicU64 = AtomicU64::new(1);

/// Numeric suffix of a `list-N` id, if it has that shape.
pub fn list_number(id: &str) -> Option<u64> {
    LIST_ID_RE
        .captures(id)
        .and_then(|caps| caps[1].parse::<u64>().ok())
}

/// Next free `list-N` id for the given lists.
/// N is one past both the list count and the highest existing suffix.
pub fn next_list_id(lists: &[TaskList]) -> String {
    next_list_id_among(lists.iter().map(|list| list.id.as_str()))
}

/// Next free `list-N` id given every id already in use.
pub fn next_list_id_among<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut count: u64 = 0;
    let mut highest: u64 = 0;
    for id in taken {
        count += 1;
        if let Some(n) = list_number(id) {
            highest = highest.max(n);
        }
    }
    format!("list-{}", highest.max(count) + 1)
}

/// Generate a fresh task id: `task-<seq>-<millis hex>`.
pub fn generate_task_id() -> String {
    let seq = NEXT_TASK_SEQ.fetch_add(1, Ordering::Relaxed);
    let ts = chrono::Utc::now().timestamp_millis().max(0);
    format!("task-{}-{:x}", seq, ts)
}

/// Generate a task id not present in `lists`.
/// Seeded boards may carry arbitrary ids, so the candidate is checked.
pub fn unique_task_id(lists: &[TaskList]) -> String {
    unique_task_id_where(|id| {
        lists
            .iter()
            .flat_map(|list| list.tasks.iter())
            .any(|task| task.id == id)
    })
}

/// Generate a task id for which `is_taken` returns false.
pub fn unique_task_id_where(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_task_id();
        if !is_taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_number() {
        assert_eq!(list_number("list-1"), Some(1));
        assert_eq!(list_number("list-42"), Some(42));
        assert_eq!(list_number("list-"), None);
        assert_eq!(list_number("todo"), None);
        assert_eq!(list_number("list-3-extra"), None);
    }

    #[test]
    fn test_next_list_id_empty() {
        assert_eq!(next_list_id(&[]), "list-1");
    }

    #[test]
    fn test_next_list_id_follows_count() {
        let lists = vec![TaskList::new("list-1", "A"), TaskList::new("list-2", "B")];
        assert_eq!(next_list_id(&lists), "list-3");
    }

    #[test]
    fn test_next_list_id_skips_higher_suffix() {
        let lists = vec![TaskList::new("list-7", "A"), TaskList::new("inbox", "B")];
        assert_eq!(next_list_id(&lists), "list-8");
    }

    #[test]
    fn test_next_list_id_with_custom_ids() {
        let lists = vec![TaskList::new("inbox", "A"), TaskList::new("later", "B")];
        assert_eq!(next_list_id(&lists), "list-3");
    }

    #[test]
    fn test_next_list_id_among_reserved_ids() {
        assert_eq!(next_list_id_among(["list-1"]), "list-2");
        assert_eq!(next_list_id_among(["inbox", "list-4"]), "list-5");
        assert_eq!(next_list_id_among(std::iter::empty()), "list-1");
    }

    #[test]
    fn test_unique_task_id_where_skips_taken() {
        let rejected = std::cell::RefCell::new(Vec::new());
        let id = unique_task_id_where(|candidate| {
            let mut seen = rejected.borrow_mut();
            if seen.is_empty() {
                seen.push(candidate.to_string());
                true
            } else {
                false
            }
        });
        assert_eq!(rejected.borrow().len(), 1);
        assert_ne!(id, rejected.borrow()[0]);
    }

    #[test]
    fn test_generate_task_id_unique_in_same_instant() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_task_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.starts_with("task-")));
    }
}
