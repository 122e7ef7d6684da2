/// In-memory board session.
///
/// Owns the current board behind an `Arc` and replaces it wholesale on every
/// successful dispatch:
/// - readers take a snapshot and keep a consistent board for as long as
///   they hold it
/// - a failed action leaves the last known-good board in place
/// - every applied action bumps a monotonic version
use std::sync::Arc;

use crate::action::{reduce, BoardAction};
use crate::config::{FieldDefaults, TaskboardConfig};
use crate::diff::{diff_boards, TaskChange};
use crate::error::{BoardError, ConfigError};
use crate::fingerprint::BoardFingerprint;
use crate::types::Board;

pub struct BoardSession {
    board: Arc<Board>,
    /// Incremented on every applied action, including no-ops
    version: u64,
    /// Fingerprint of `board`
    fingerprint: BoardFingerprint,
    /// Changes made by the most recent dispatch
    last_changes: Vec<TaskChange>,
    field_defaults: FieldDefaults,
}

impl BoardSession {
    pub fn new(board: Board) -> Self {
        Self::with_field_defaults(board, FieldDefaults::default())
    }

    fn with_field_defaults(board: Board, field_defaults: FieldDefaults) -> Self {
        let fingerprint = BoardFingerprint::of(&board);
        Self {
            board: Arc::new(board),
            version: 0,
            fingerprint,
            last_changes: Vec::new(),
            field_defaults,
        }
    }

    /// Start a session from configuration (seed board plus field defaults).
    pub fn from_config(config: &TaskboardConfig) -> Result<Self, ConfigError> {
        let board = Board::from_seed(&config.board)?;
        Ok(Self::with_field_defaults(board, config.form.clone()))
    }

    /// Current board. The returned snapshot never changes.
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn fingerprint(&self) -> &BoardFingerprint {
        &self.fingerprint
    }

    pub fn last_changes(&self) -> &[TaskChange] {
        &self.last_changes
    }

    /// Field defaults configured for the form builder of this session.
    pub fn field_defaults(&self) -> &FieldDefaults {
        &self.field_defaults
    }

    /// Reduce `action` against the current board and publish the result.
    pub fn dispatch(&mut self, action: BoardAction) -> Result<Arc<Board>, BoardError> {
        let next = match reduce(&self.board, &action) {
            Ok(next) => next,
            Err(e) => {
                log::warn!(
                    "[taskboard.session.dispatch] {} rejected at version {}: {}",
                    action.name(),
                    self.version,
                    e
                );
                return Err(e);
            }
        };

        let fingerprint = BoardFingerprint::of(&next);
        self.last_changes = if fingerprint == self.fingerprint {
            Vec::new()
        } else {
            diff_boards(&self.board, &next)
        };
        self.board = Arc::new(next);
        self.fingerprint = fingerprint;
        self.version += 1;

        log::debug!(
            "[taskboard.session.dispatch] {} applied, version {} ({} changes)",
            action.name(),
            self.version,
            self.last_changes.len()
        );
        Ok(self.snapshot())
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
