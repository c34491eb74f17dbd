pub mod commands;
pub mod error;
pub mod model;
pub mod tui;
pub mod types;
pub mod utils;

pub use error::{Result, TriptychError};
pub use model::{Board, ColumnAction, ColumnEvent, ColumnModel, EditorModel};
pub use types::{Issue, IssueId, Status, VALID_STATUSES};
