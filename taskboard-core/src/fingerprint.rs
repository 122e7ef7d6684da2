/// SHA-256 fingerprint of a board, used by renderers to skip redraws when a
/// transition produced an identical board (no-op add, cancelled drag).
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::Board;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardFingerprint(pub String);

impl BoardFingerprint {
    /// Hash the ordered list/task structure of `board`.
    ///
    /// Fields are fed with length prefixes so `["ab", "c"]` and `["a", "bc"]`
    /// hash differently.
    pub fn of(board: &Board) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((board.lists.len() as u64).to_le_bytes());
        for list in &board.lists {
            update_str(&mut hasher, &list.id);
            update_str(&mut hasher, &list.title);
            hasher.update((list.tasks.len() as u64).to_le_bytes());
            for task in &list.tasks {
                update_str(&mut hasher, &task.id);
                update_str(&mut hasher, &task.content);
            }
        }
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
