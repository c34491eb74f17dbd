//! Reusable TUI components

pub mod empty_state;
pub mod footer;
pub mod issue_card;
pub mod move_menu;
pub mod shortcuts;

pub use empty_state::EmptyState;
pub use footer::{
    Footer, Shortcut, board_shortcuts, edit_shortcuts, empty_shortcuts, move_menu_shortcuts,
    read_shortcuts,
};
pub use issue_card::IssueCard;
pub use move_menu::MoveMenu;
pub use shortcuts::ShortcutsBuilder;
