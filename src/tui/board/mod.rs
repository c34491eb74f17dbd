//! Board view (`triptych board`)
//!
//! Interactive TUI showing the three status columns side by side, with a
//! modal move menu and a modal issue editor layered on top.

pub mod handlers;
pub mod model;

use iocraft::prelude::*;
use jiff::Zoned;

use crate::tui::components::{EmptyState, Footer, IssueCard, MoveMenu};
use crate::tui::edit::EditorOverlay;
use crate::tui::theme::theme;

use handlers::{InputMode, key_to_action};
use model::{BoardAction, BoardState, compute_board_view_model, reduce_board_state};

/// Props for the BoardApp component
#[derive(Default, Props)]
pub struct BoardAppProps {}

/// Main board component
///
/// Layout:
/// ```text
/// +------------------------------------+
/// | Triptych                  5 issues |
/// +------------+-----------+-----------+
/// |   TO-DO    |   DOING   |   DONE    |
/// |     3      |     1     |     1     |
/// +------------+-----------+-----------+
/// | Card1      | Card1     | Card1     |
/// | Card2      |           |           |
/// | Card3      |           |           |
/// +------------+-----------+-----------+
/// | Footer with shortcuts              |
/// +------------------------------------+
/// ```
#[component]
pub fn BoardApp<'a>(_props: &BoardAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut board_state: State<BoardState> = hooks.use_state(BoardState::default);
    let mut should_exit = hooks.use_state(|| false);

    // header + column headers + footer
    let available_height = (height as usize).saturating_sub(5);
    // Each card is up to ~8 lines, reserve 2 for scroll indicators.
    let cards_per_column = (available_height.saturating_sub(2) / 8).max(1);

    let snapshot = { board_state.read().clone() };
    let is_editing = snapshot.editor.is_some();
    let input_mode = if snapshot.move_menu.is_some() {
        InputMode::MoveMenu
    } else {
        InputMode::Board
    };

    // Keyboard event handling; the editor overlay consumes its own events.
    hooks.use_terminal_events({
        move |event| {
            if is_editing {
                return;
            }
            let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }
            let Some(action) = key_to_action(code, modifiers, input_mode) else {
                return;
            };
            if action == BoardAction::Quit {
                should_exit.set(true);
                return;
            }
            let next = {
                let current = board_state.read().clone();
                reduce_board_state(current, action, cards_per_column)
            };
            board_state.set(next);
        }
    });

    // Exit if requested
    if should_exit.get() {
        system.exit();
    }

    let today = Zoned::now().date();
    let vm = compute_board_view_model(&snapshot, cards_per_column, today);
    let columns = vm.columns;
    let shortcuts = vm.shortcuts;
    let total_issues = vm.total_issues;
    let show_empty_state = vm.show_empty_state;

    // Card text width: a third of the terminal minus column chrome.
    let card_width = (width as u32 / 3).saturating_sub(4);

    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            // Header
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(
                    content: "Triptych",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("{} issues", total_issues),
                    color: theme.text_dimmed,
                )
            }

            #(if show_empty_state {
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState()
                    }
                })
            } else {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                        overflow: Overflow::Hidden,
                    ) {
                        // Column headers
                        View(
                            width: 100pct,
                            height: 2,
                            flex_direction: FlexDirection::Row,
                            margin_top: 1,
                        ) {
                            #(columns.iter().map(|col| {
                                let status_color = theme.status_color(col.status);
                                let is_active = col.is_active;
                                let name = col.name;
                                let count = col.issue_count;

                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        flex_direction: FlexDirection::Column,
                                        align_items: AlignItems::Center,
                                        border_edges: Edges::Bottom,
                                        border_style: BorderStyle::Single,
                                        border_color: if is_active { theme.border_focused } else { theme.border },
                                    ) {
                                        Text(
                                            content: name,
                                            color: if is_active { status_color } else { theme.text_dimmed },
                                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                                        )
                                        Text(
                                            content: count.to_string(),
                                            color: theme.text_dimmed,
                                        )
                                    }
                                }
                            }))
                        }

                        // Column content
                        View(
                            flex_grow: 1.0,
                            width: 100pct,
                            flex_direction: FlexDirection::Row,
                            overflow: Overflow::Hidden,
                        ) {
                            #(columns.iter().map(|col| {
                                let hidden_above = col.hidden_above;
                                let hidden_below = col.hidden_below;
                                let cards = col.cards.clone();

                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        height: 100pct,
                                        flex_direction: FlexDirection::Column,
                                        padding_left: 1,
                                        padding_right: 1,
                                        border_edges: Edges::Right,
                                        border_style: BorderStyle::Single,
                                        border_color: theme.border,
                                        overflow: Overflow::Hidden,
                                    ) {
                                        // "More above" indicator
                                        #(if hidden_above > 0 {
                                            Some(element! {
                                                View(height: 1, padding_left: 1) {
                                                    Text(
                                                        content: format!("  {} more above", hidden_above),
                                                        color: theme.text_dimmed,
                                                    )
                                                }
                                            })
                                        } else {
                                            None
                                        })

                                        // Visible cards
                                        #(cards.into_iter().map(|card| {
                                            element! {
                                                View(margin_top: 1) {
                                                    IssueCard(
                                                        issue: card.issue,
                                                        is_selected: card.is_selected,
                                                        deadline_label: card.deadline_label,
                                                        is_overdue: card.is_overdue,
                                                        width: Some(card_width),
                                                    )
                                                }
                                            }
                                        }))

                                        // Spacer to push "more below" to bottom
                                        View(flex_grow: 1.0)

                                        // "More below" indicator
                                        #(if hidden_below > 0 {
                                            Some(element! {
                                                View(height: 1, padding_left: 1) {
                                                    Text(
                                                        content: format!("  {} more below", hidden_below),
                                                        color: theme.text_dimmed,
                                                    )
                                                }
                                            })
                                        } else {
                                            None
                                        })
                                    }
                                }
                            }))
                        }
                    }
                })
            })

            // Footer
            Footer(shortcuts: shortcuts)

            // Move menu overlay
            #(if snapshot.move_menu.is_some() {
                Some(element! {
                    MoveMenu(menu: snapshot.move_menu.clone())
                })
            } else {
                None
            })

            // Editor overlay
            #(if is_editing {
                Some(element! {
                    EditorOverlay(board: Some(board_state))
                })
            } else {
                None
            })
        }
    }
}
