//! Board model types for testable state management
//!
//! Separates state (BoardState) from view (BoardViewModel) so interaction
//! logic can be unit tested without the iocraft framework.

use jiff::civil::Date;

use crate::model::{Board, ColumnAction, EditorAction, EditorEvent, EditorModel};
use crate::tui::components::footer::Shortcut;
use crate::tui::components::{
    board_shortcuts, edit_shortcuts, empty_shortcuts, move_menu_shortcuts, read_shortcuts,
};
use crate::types::{Issue, Status};

/// The 3 board columns in order
pub const COLUMNS: [Status; 3] = Status::ALL;

/// Column display names
pub const COLUMN_NAMES: [&str; 3] = ["TO-DO", "DOING", "DONE"];

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// All issues, owned column by column
    pub board: Board,
    /// Index of the currently selected column (0-2)
    pub current_column: usize,
    /// Index of the currently selected row within the column
    pub current_row: usize,
    /// Scroll offset for each column (index of first visible card)
    pub column_scroll_offsets: [usize; 3],
    /// Open move-destination menu, if any
    pub move_menu: Option<MoveMenuState>,
    /// Open issue editor, if any
    pub editor: Option<EditorModel>,
}

/// State of the modal move-destination menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMenuState {
    /// The issue being moved
    pub issue: Issue,
    /// Column the issue currently lives in
    pub from: Status,
    /// The two candidate destinations, in board order
    pub options: [Status; 2],
    /// Index of the highlighted option (0-1)
    pub selected: usize,
}

/// All possible actions on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    // Navigation
    /// Move selection to the left column
    MoveLeft,
    /// Move selection to the right column
    MoveRight,
    /// Move selection up within the column
    MoveUp,
    /// Move selection down within the column
    MoveDown,
    /// Jump to top of column
    GoToTop,
    /// Jump to bottom of column
    GoToBottom,

    // Issue operations
    /// Open the selected issue read-only
    OpenSelected,
    /// Open the editor for a new issue
    CreateNew,
    /// Delete the selected issue
    DeleteSelected,
    /// Open the move-destination menu for the selected issue
    OpenMoveMenu,

    // Move menu
    /// Highlight the previous destination
    MoveMenuUp,
    /// Highlight the next destination
    MoveMenuDown,
    /// Move the issue to the highlighted destination
    MoveMenuConfirm,
    /// Close the menu without moving
    MoveMenuCancel,

    // App
    /// Quit the application
    Quit,
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    /// One view model per column, in board order
    pub columns: Vec<ColumnViewModel>,
    /// Keyboard shortcuts to display in the footer
    pub shortcuts: Vec<Shortcut>,
    /// Total number of issues across all columns
    pub total_issues: usize,
    /// Whether the full-screen empty state should be shown
    pub show_empty_state: bool,
}

/// View model for a single column
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    /// Status this column represents
    pub status: Status,
    /// Display name of the column
    pub name: &'static str,
    /// Whether this column is currently selected
    pub is_active: bool,
    /// Number of issues in this column
    pub issue_count: usize,
    /// Cards to display in this column
    pub cards: Vec<CardViewModel>,
    /// Number of issues above the visible area
    pub hidden_above: usize,
    /// Number of issues below the visible area
    pub hidden_below: usize,
}

/// View model for a single issue card
#[derive(Debug, Clone)]
pub struct CardViewModel {
    pub issue: Issue,
    /// Whether this card is currently selected
    pub is_selected: bool,
    /// Formatted deadline for display
    pub deadline_label: String,
    /// Whether the deadline should render in the overdue color
    pub is_overdue: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// The issue currently under the selection cursor, if any.
pub fn selected_issue(state: &BoardState) -> Option<&Issue> {
    state
        .board
        .column(COLUMNS[state.current_column])
        .issues()
        .get(state.current_row)
}

fn column_len(state: &BoardState, column: usize) -> usize {
    state.board.column(COLUMNS[column]).len()
}

/// Pure function: compute view model from state
///
/// The `column_height` parameter is the number of visible cards per column;
/// `today` anchors the overdue check.
pub fn compute_board_view_model(
    state: &BoardState,
    column_height: usize,
    today: Date,
) -> BoardViewModel {
    let total_issues = state.board.total();
    let show_empty_state = total_issues == 0 && state.editor.is_none();

    let shortcuts = if let Some(editor) = &state.editor {
        if editor.is_editable() {
            edit_shortcuts()
        } else {
            read_shortcuts()
        }
    } else if state.move_menu.is_some() {
        move_menu_shortcuts()
    } else if show_empty_state {
        empty_shortcuts()
    } else {
        board_shortcuts()
    };

    let columns: Vec<ColumnViewModel> = COLUMNS
        .iter()
        .enumerate()
        .map(|(col_idx, &status)| {
            let issues = state.board.column(status).issues();
            let is_active = state.current_column == col_idx;

            let total_count = issues.len();
            let scroll_offset = state.column_scroll_offsets[col_idx];
            let start = scroll_offset.min(total_count);
            let end = (scroll_offset + column_height).min(total_count);

            let cards: Vec<CardViewModel> = issues
                .iter()
                .enumerate()
                .skip(start)
                .take(end - start)
                .map(|(row_idx, issue)| CardViewModel {
                    issue: issue.clone(),
                    is_selected: is_active && row_idx == state.current_row,
                    deadline_label: issue.deadline.to_string(),
                    is_overdue: issue.is_overdue(today),
                })
                .collect();

            ColumnViewModel {
                status,
                name: COLUMN_NAMES[col_idx],
                is_active,
                issue_count: total_count,
                cards,
                hidden_above: start,
                hidden_below: total_count.saturating_sub(end),
            }
        })
        .collect();

    BoardViewModel {
        columns,
        shortcuts,
        total_issues,
        show_empty_state,
    }
}

/// Adjust scroll offset to keep selected row vertically centered.
///
/// Clamps to valid scroll bounds when near the top or bottom.
fn adjust_column_scroll(selected_row: usize, column_height: usize, total_items: usize) -> usize {
    if column_height == 0 || total_items == 0 {
        return 0;
    }
    let half_height = column_height / 2;
    let ideal_offset = selected_row.saturating_sub(half_height);
    let max_offset = total_items.saturating_sub(column_height);
    ideal_offset.min(max_offset)
}

/// Clamp the cursor to the current column and recenter its scroll.
fn clamp_selection(state: &mut BoardState, column_height: usize) {
    let col = state.current_column;
    let total_items = column_len(state, col);
    let max_row = total_items.saturating_sub(1);
    if state.current_row > max_row {
        state.current_row = max_row;
    }
    state.column_scroll_offsets[col] =
        adjust_column_scroll(state.current_row, column_height, total_items);
}

/// Pure function: apply action to state (reducer pattern)
///
/// Contains only state transitions, no side effects. `Quit` is handled by the
/// component through the system context and passes through unchanged.
pub fn reduce_board_state(
    mut state: BoardState,
    action: BoardAction,
    column_height: usize,
) -> BoardState {
    match action {
        // Navigation
        BoardAction::MoveLeft => {
            state.current_column = state.current_column.saturating_sub(1);
            clamp_selection(&mut state, column_height);
        }
        BoardAction::MoveRight => {
            state.current_column = (state.current_column + 1).min(COLUMNS.len() - 1);
            clamp_selection(&mut state, column_height);
        }
        BoardAction::MoveUp => {
            state.current_row = state.current_row.saturating_sub(1);
            clamp_selection(&mut state, column_height);
        }
        BoardAction::MoveDown => {
            state.current_row += 1;
            clamp_selection(&mut state, column_height);
        }
        BoardAction::GoToTop => {
            state.current_row = 0;
            state.column_scroll_offsets[state.current_column] = 0;
        }
        BoardAction::GoToBottom => {
            state.current_row = usize::MAX;
            clamp_selection(&mut state, column_height);
        }

        // Issue operations
        BoardAction::OpenSelected => {
            if let Some(issue) = selected_issue(&state).cloned() {
                state.editor = Some(EditorModel::existing(issue));
            }
        }
        BoardAction::CreateNew => {
            state.editor = Some(EditorModel::new_issue());
        }
        BoardAction::DeleteSelected => {
            if let Some((status, id)) = selected_issue(&state).map(|i| (i.status, i.id)) {
                state.board.apply(status, ColumnAction::Delete(id));
                clamp_selection(&mut state, column_height);
            }
        }
        BoardAction::OpenMoveMenu => {
            if let Some(issue) = selected_issue(&state).cloned() {
                state.move_menu = Some(MoveMenuState {
                    from: issue.status,
                    options: issue.status.others(),
                    selected: 0,
                    issue,
                });
            }
        }

        // Move menu
        BoardAction::MoveMenuUp => {
            if let Some(menu) = &mut state.move_menu {
                menu.selected = menu.selected.saturating_sub(1);
            }
        }
        BoardAction::MoveMenuDown => {
            if let Some(menu) = &mut state.move_menu {
                menu.selected = (menu.selected + 1).min(menu.options.len() - 1);
            }
        }
        BoardAction::MoveMenuConfirm => {
            if let Some(menu) = state.move_menu.take() {
                let to = menu.options[menu.selected];
                state.board.apply(
                    menu.from,
                    ColumnAction::MoveOut {
                        id: menu.issue.id,
                        to,
                    },
                );
                clamp_selection(&mut state, column_height);
            }
        }
        BoardAction::MoveMenuCancel => {
            state.move_menu = None;
        }

        // Handled by the component through the system context
        BoardAction::Quit => {}
    }
    state
}

/// Drive the open editor and fold its completion events back into the board.
///
/// `Created` issues land in To-Do, `Updated` ones replace their originals in
/// place, `Dismiss` closes the editor. `DiscardLastInput` is returned to the
/// caller so the view can drop the overflowing character.
pub fn apply_editor_action(state: &mut BoardState, action: EditorAction) -> Vec<EditorEvent> {
    let Some(editor) = state.editor.as_mut() else {
        return vec![];
    };
    let events = editor.apply(action);
    for event in &events {
        match event {
            EditorEvent::Created(issue) => {
                state.board.deliver(issue.clone());
            }
            EditorEvent::Updated(issue) => {
                state.board.update(issue.clone());
            }
            EditorEvent::Dismiss => {
                state.editor = None;
            }
            EditorEvent::DiscardLastInput => {}
        }
    }
    events
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EditorMode;
    use jiff::civil::date;

    const TEST_COLUMN_HEIGHT: usize = 10;

    fn today() -> Date {
        date(2026, 6, 15)
    }

    fn seeded_state(todo: usize, doing: usize, done: usize) -> BoardState {
        let mut state = BoardState::default();
        for (status, count) in [
            (Status::Todo, todo),
            (Status::Doing, doing),
            (Status::Done, done),
        ] {
            for i in 0..count {
                let mut issue = Issue::new(format!("{status} {i}"), "", date(2026, 7, 1));
                issue.status = status;
                state.board.deliver(issue);
            }
        }
        state
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_reduce_move_right_and_left() {
        let state = seeded_state(1, 1, 1);
        let state = reduce_board_state(state, BoardAction::MoveRight, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_column, 1);
        let state = reduce_board_state(state, BoardAction::MoveLeft, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_column, 0);
    }

    #[test]
    fn test_reduce_move_right_stops_at_last_column() {
        let mut state = seeded_state(1, 1, 1);
        state.current_column = 2;
        let state = reduce_board_state(state, BoardAction::MoveRight, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_column, 2);
    }

    #[test]
    fn test_reduce_move_left_stops_at_first_column() {
        let state = seeded_state(1, 1, 1);
        let state = reduce_board_state(state, BoardAction::MoveLeft, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_column, 0);
    }

    #[test]
    fn test_reduce_column_change_clamps_row() {
        let mut state = seeded_state(5, 2, 0);
        state.current_row = 4;
        let state = reduce_board_state(state, BoardAction::MoveRight, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_column, 1);
        assert_eq!(state.current_row, 1);
    }

    #[test]
    fn test_reduce_move_down_and_up() {
        let state = seeded_state(3, 0, 0);
        let state = reduce_board_state(state, BoardAction::MoveDown, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_row, 1);
        let state = reduce_board_state(state, BoardAction::MoveUp, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_row, 0);
    }

    #[test]
    fn test_reduce_move_down_stops_at_bottom() {
        let mut state = seeded_state(2, 0, 0);
        state.current_row = 1;
        let state = reduce_board_state(state, BoardAction::MoveDown, TEST_COLUMN_HEIGHT);
        assert_eq!(state.current_row, 1);
    }

    #[test]
    fn test_reduce_go_to_top_and_bottom() {
        let mut state = seeded_state(15, 0, 0);
        state.current_row = 7;
        state.column_scroll_offsets[0] = 4;

        let state = reduce_board_state(state, BoardAction::GoToTop, 5);
        assert_eq!(state.current_row, 0);
        assert_eq!(state.column_scroll_offsets[0], 0);

        let state = reduce_board_state(state, BoardAction::GoToBottom, 5);
        assert_eq!(state.current_row, 14);
        assert_eq!(state.column_scroll_offsets[0], 10);
    }

    #[test]
    fn test_scroll_keeps_selection_centered() {
        let mut state = seeded_state(15, 0, 0);
        state.current_row = 4;

        // half_height = 5/2 = 2, ideal_offset = 5 - 2 = 3
        let state = reduce_board_state(state, BoardAction::MoveDown, 5);
        assert_eq!(state.current_row, 5);
        assert_eq!(state.column_scroll_offsets[0], 3);
    }

    // ========================================================================
    // Issue operations
    // ========================================================================

    #[test]
    fn test_reduce_open_selected_opens_readonly_editor() {
        let state = seeded_state(1, 0, 0);
        let state = reduce_board_state(state, BoardAction::OpenSelected, TEST_COLUMN_HEIGHT);
        let editor = state.editor.expect("editor should be open");
        assert!(!editor.is_editable());
        assert!(matches!(editor.mode(), EditorMode::Existing { .. }));
    }

    #[test]
    fn test_reduce_open_selected_on_empty_column_is_noop() {
        let state = seeded_state(0, 0, 0);
        let state = reduce_board_state(state, BoardAction::OpenSelected, TEST_COLUMN_HEIGHT);
        assert!(state.editor.is_none());
    }

    #[test]
    fn test_reduce_create_new_opens_editable_editor() {
        let state = seeded_state(0, 0, 0);
        let state = reduce_board_state(state, BoardAction::CreateNew, TEST_COLUMN_HEIGHT);
        let editor = state.editor.expect("editor should be open");
        assert!(editor.is_editable());
        assert_eq!(*editor.mode(), EditorMode::New);
    }

    #[test]
    fn test_reduce_delete_selected_removes_and_clamps() {
        let mut state = seeded_state(2, 0, 0);
        state.current_row = 1;
        let state = reduce_board_state(state, BoardAction::DeleteSelected, TEST_COLUMN_HEIGHT);
        assert_eq!(state.board.column(Status::Todo).len(), 1);
        assert_eq!(state.current_row, 0);
    }

    #[test]
    fn test_reduce_delete_on_empty_column_is_noop() {
        let state = seeded_state(0, 1, 0);
        let state = reduce_board_state(state, BoardAction::DeleteSelected, TEST_COLUMN_HEIGHT);
        assert_eq!(state.board.total(), 1);
    }

    // ========================================================================
    // Move menu
    // ========================================================================

    #[test]
    fn test_reduce_open_move_menu_lists_other_columns() {
        let mut state = seeded_state(0, 1, 0);
        state.current_column = 1;
        let state = reduce_board_state(state, BoardAction::OpenMoveMenu, TEST_COLUMN_HEIGHT);
        let menu = state.move_menu.expect("menu should be open");
        assert_eq!(menu.from, Status::Doing);
        assert_eq!(menu.options, [Status::Todo, Status::Done]);
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_reduce_move_menu_navigation_clamps() {
        let state = seeded_state(1, 0, 0);
        let state = reduce_board_state(state, BoardAction::OpenMoveMenu, TEST_COLUMN_HEIGHT);
        let state = reduce_board_state(state, BoardAction::MoveMenuDown, TEST_COLUMN_HEIGHT);
        assert_eq!(state.move_menu.as_ref().unwrap().selected, 1);
        let state = reduce_board_state(state, BoardAction::MoveMenuDown, TEST_COLUMN_HEIGHT);
        assert_eq!(state.move_menu.as_ref().unwrap().selected, 1);
        let state = reduce_board_state(state, BoardAction::MoveMenuUp, TEST_COLUMN_HEIGHT);
        assert_eq!(state.move_menu.as_ref().unwrap().selected, 0);
    }

    #[test]
    fn test_reduce_move_menu_confirm_moves_issue() {
        let state = seeded_state(1, 0, 0);
        let state = reduce_board_state(state, BoardAction::OpenMoveMenu, TEST_COLUMN_HEIGHT);
        // First option for a To-Do issue is Doing.
        let state = reduce_board_state(state, BoardAction::MoveMenuConfirm, TEST_COLUMN_HEIGHT);
        assert!(state.move_menu.is_none());
        assert!(state.board.column(Status::Todo).is_empty());
        assert_eq!(state.board.column(Status::Doing).len(), 1);
        assert_eq!(
            state.board.column(Status::Doing).issues()[0].status,
            Status::Doing
        );
    }

    #[test]
    fn test_reduce_move_menu_cancel_keeps_issue() {
        let state = seeded_state(1, 0, 0);
        let state = reduce_board_state(state, BoardAction::OpenMoveMenu, TEST_COLUMN_HEIGHT);
        let state = reduce_board_state(state, BoardAction::MoveMenuCancel, TEST_COLUMN_HEIGHT);
        assert!(state.move_menu.is_none());
        assert_eq!(state.board.column(Status::Todo).len(), 1);
    }

    // ========================================================================
    // Editor wiring
    // ========================================================================

    #[test]
    fn test_apply_editor_action_created_lands_in_todo() {
        let mut state = seeded_state(0, 0, 0);
        state = reduce_board_state(state, BoardAction::CreateNew, TEST_COLUMN_HEIGHT);
        let events = apply_editor_action(
            &mut state,
            EditorAction::TapSave {
                title: "Fix bug".to_string(),
                body: String::new(),
                deadline: date(2026, 7, 1),
            },
        );
        assert_eq!(events.len(), 2);
        assert!(state.editor.is_none());
        assert_eq!(state.board.column(Status::Todo).len(), 1);
    }

    #[test]
    fn test_apply_editor_action_updated_replaces_in_place() {
        let mut state = seeded_state(0, 1, 0);
        state.current_column = 1;
        state = reduce_board_state(state, BoardAction::OpenSelected, TEST_COLUMN_HEIGHT);
        apply_editor_action(&mut state, EditorAction::TapEdit);
        apply_editor_action(
            &mut state,
            EditorAction::TapSave {
                title: "revised".to_string(),
                body: "b".to_string(),
                deadline: date(2026, 8, 1),
            },
        );
        assert!(state.editor.is_none());
        let doing = state.board.column(Status::Doing).issues();
        assert_eq!(doing.len(), 1);
        assert_eq!(doing[0].title, "revised");
    }

    #[test]
    fn test_apply_editor_action_without_editor_is_noop() {
        let mut state = seeded_state(1, 0, 0);
        let events = apply_editor_action(&mut state, EditorAction::TapCancel);
        assert!(events.is_empty());
        assert_eq!(state.board.total(), 1);
    }

    // ========================================================================
    // View model
    // ========================================================================

    #[test]
    fn test_compute_view_model_empty() {
        let state = seeded_state(0, 0, 0);
        let vm = compute_board_view_model(&state, TEST_COLUMN_HEIGHT, today());
        assert_eq!(vm.columns.len(), 3);
        assert_eq!(vm.total_issues, 0);
        assert!(vm.show_empty_state);
    }

    #[test]
    fn test_compute_view_model_counts_and_selection() {
        let mut state = seeded_state(2, 1, 0);
        state.current_row = 1;
        let vm = compute_board_view_model(&state, TEST_COLUMN_HEIGHT, today());

        assert_eq!(vm.total_issues, 3);
        assert!(!vm.show_empty_state);
        assert_eq!(vm.columns[0].issue_count, 2);
        assert_eq!(vm.columns[1].issue_count, 1);
        assert_eq!(vm.columns[2].issue_count, 0);

        assert!(vm.columns[0].is_active);
        assert!(!vm.columns[0].cards[0].is_selected);
        assert!(vm.columns[0].cards[1].is_selected);
        assert!(!vm.columns[1].cards[0].is_selected);
    }

    #[test]
    fn test_compute_view_model_overdue_flags() {
        let mut state = BoardState::default();
        let overdue = Issue::new("late", "", date(2026, 6, 1));
        let mut done_late = Issue::new("done late", "", date(2026, 6, 1));
        done_late.status = Status::Done;
        state.board.deliver(overdue);
        state.board.deliver(done_late);

        let vm = compute_board_view_model(&state, TEST_COLUMN_HEIGHT, today());
        assert!(vm.columns[0].cards[0].is_overdue);
        assert!(!vm.columns[2].cards[0].is_overdue);
    }

    #[test]
    fn test_compute_view_model_hidden_counts() {
        let mut state = seeded_state(15, 0, 0);
        state.current_row = 7;
        state.column_scroll_offsets[0] = 5;

        let vm = compute_board_view_model(&state, 5, today());
        assert_eq!(vm.columns[0].hidden_above, 5);
        assert_eq!(vm.columns[0].hidden_below, 5);
        assert_eq!(vm.columns[0].cards.len(), 5);
    }

    #[test]
    fn test_compute_view_model_shortcut_sets() {
        let state = seeded_state(1, 0, 0);
        let board = compute_board_view_model(&state, TEST_COLUMN_HEIGHT, today());
        assert!(board.shortcuts.iter().any(|s| s.key == "n"));

        let state = reduce_board_state(state, BoardAction::OpenSelected, TEST_COLUMN_HEIGHT);
        let read = compute_board_view_model(&state, TEST_COLUMN_HEIGHT, today());
        assert!(read.shortcuts.iter().any(|s| s.key == "e"));

        let mut state = state;
        apply_editor_action(&mut state, EditorAction::TapEdit);
        let edit = compute_board_view_model(&state, TEST_COLUMN_HEIGHT, today());
        assert!(edit.shortcuts.iter().any(|s| s.key == "C-s"));
    }
}
