//! Keyboard mapping for the board view
//!
//! The mapping is a pure function from key events to board actions, so it can
//! be unit tested without any iocraft machinery. The editor overlay consumes
//! its own key events and never routes through here.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::BoardAction;

/// Which surface currently receives board-level key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The board itself
    #[default]
    Board,
    /// The move-destination menu is open and captures input
    MoveMenu,
}

/// Convert a key event to a BoardAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in the given mode.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    mode: InputMode,
) -> Option<BoardAction> {
    match mode {
        InputMode::MoveMenu => move_menu_key_to_action(code),
        InputMode::Board => board_key_to_action(code, modifiers),
    }
}

fn board_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BoardAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(BoardAction::Quit),
            _ => None,
        };
    }

    match code {
        // Navigation
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),
        KeyCode::Char('g') => Some(BoardAction::GoToTop),
        KeyCode::Char('G') => Some(BoardAction::GoToBottom),

        // Issue operations
        KeyCode::Enter => Some(BoardAction::OpenSelected),
        KeyCode::Char('n') => Some(BoardAction::CreateNew),
        KeyCode::Char('d') => Some(BoardAction::DeleteSelected),
        KeyCode::Char('m') => Some(BoardAction::OpenMoveMenu),

        // App
        KeyCode::Char('q') | KeyCode::Esc => Some(BoardAction::Quit),

        _ => None,
    }
}

fn move_menu_key_to_action(code: KeyCode) -> Option<BoardAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveMenuDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveMenuUp),
        KeyCode::Enter => Some(BoardAction::MoveMenuConfirm),
        KeyCode::Esc => Some(BoardAction::MoveMenuCancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_action_navigation() {
        assert_eq!(
            key_to_action(KeyCode::Char('h'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::MoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Left, KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::MoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('l'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::MoveRight)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Up, KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::MoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('g'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::GoToTop)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('G'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::GoToBottom)
        );
    }

    #[test]
    fn test_key_to_action_issue_operations() {
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::OpenSelected)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('n'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::CreateNew)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('d'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::DeleteSelected)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('m'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::OpenMoveMenu)
        );
    }

    #[test]
    fn test_key_to_action_quit() {
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, InputMode::Board),
            Some(BoardAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, InputMode::Board),
            Some(BoardAction::Quit)
        );
    }

    #[test]
    fn test_key_to_action_unknown_key() {
        assert_eq!(
            key_to_action(KeyCode::Char('x'), KeyModifiers::NONE, InputMode::Board),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::F(1), KeyModifiers::NONE, InputMode::Board),
            None
        );
    }

    #[test]
    fn test_key_to_action_move_menu_mode() {
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, InputMode::MoveMenu),
            Some(BoardAction::MoveMenuDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('k'), KeyModifiers::NONE, InputMode::MoveMenu),
            Some(BoardAction::MoveMenuUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, InputMode::MoveMenu),
            Some(BoardAction::MoveMenuConfirm)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, InputMode::MoveMenu),
            Some(BoardAction::MoveMenuCancel)
        );
    }

    #[test]
    fn test_key_to_action_board_keys_ignored_in_move_menu() {
        assert_eq!(
            key_to_action(KeyCode::Char('h'), KeyModifiers::NONE, InputMode::MoveMenu),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('d'), KeyModifiers::NONE, InputMode::MoveMenu),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, InputMode::MoveMenu),
            None
        );
    }
}
