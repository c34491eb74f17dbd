pub mod column;
pub mod coordinator;
pub mod editor;

pub use column::{ColumnAction, ColumnEvent, ColumnModel};
pub use coordinator::Board;
pub use editor::{EditorAction, EditorEvent, EditorMode, EditorModel, MAX_BODY_LEN};
