//! Task board and form builder state core.
//!
//! `board` holds the transitions (add list, add task, move task), `session`
//! owns the current board for a UI, and `form` is the field-sequence builder.
pub mod action;
pub mod board;
pub mod config;
pub mod diff;
pub mod error;
pub mod fingerprint;
pub mod form;
pub mod ids;
pub mod search;
pub mod session;
pub mod types;

pub use action::{reduce, BoardAction};
pub use error::{BoardError, ConfigError, FormError};
pub use form::{Field, FieldKind, FormAction, FormSchema};
pub use session::BoardSession;
pub use types::{Board, DragLocation, DragResult, Task, TaskList};
