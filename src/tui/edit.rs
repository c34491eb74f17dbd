//! Issue editor modal
//!
//! One form covers three situations: creating a new issue, viewing an
//! existing one read-only, and editing it after pressing 'e'. The form only
//! renders while the board state holds an open editor model; field edits stay
//! local until save, when they are committed through the model.

use iocraft::prelude::*;
use jiff::civil::Date;

use crate::error::TriptychError;
use crate::model::{EditorAction, EditorEvent, EditorMode};
use crate::tui::board::model::{BoardState, apply_editor_action};
use crate::tui::components::{Footer, edit_shortcuts, read_shortcuts};
use crate::tui::theme::theme;
use crate::types::Issue;

/// Which field is currently focused in the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Deadline,
    Body,
}

impl EditField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            EditField::Title => EditField::Deadline,
            EditField::Deadline => EditField::Body,
            EditField::Body => EditField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            EditField::Title => EditField::Body,
            EditField::Deadline => EditField::Title,
            EditField::Body => EditField::Deadline,
        }
    }
}

/// Props for the EditorOverlay component
#[derive(Default, Props)]
pub struct EditorOverlayProps {
    /// Shared board state holding the open editor model
    pub board: Option<State<BoardState>>,
}

/// Modal editor form component
#[component]
pub fn EditorOverlay<'a>(props: &EditorOverlayProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let board = props.board;

    // Mode and header derive from the live editor model each render.
    let (editable, header_title) = match board {
        Some(b) => {
            let st = b.read();
            match st.editor.as_ref() {
                Some(editor) => {
                    let header = match editor.mode() {
                        EditorMode::New => "New Issue".to_string(),
                        EditorMode::Existing { issue, editing } => {
                            let suffix = if *editing { "" } else { " (read-only)" };
                            format!("Issue {} [{}]{}", issue.id.short(), issue.status, suffix)
                        }
                    };
                    (editor.is_editable(), header)
                }
                None => (false, String::new()),
            }
        }
        None => (false, String::new()),
    };

    // Field values seed from the issue being viewed, once on mount.
    let initial: Option<Issue> = board.and_then(|b| {
        b.read()
            .editor
            .as_ref()
            .and_then(|editor| editor.issue().cloned())
    });
    let mut title = hooks.use_state({
        let seed = initial
            .as_ref()
            .map(|i| i.title.clone())
            .unwrap_or_default();
        move || seed
    });
    let mut deadline_input = hooks.use_state({
        let seed = initial
            .as_ref()
            .map(|i| i.deadline.to_string())
            .unwrap_or_default();
        move || seed
    });
    let mut body = hooks.use_state({
        let seed = initial.as_ref().map(|i| i.body.clone()).unwrap_or_default();
        move || seed
    });

    // UI state
    let mut focused_field = hooks.use_state(EditField::default);
    let mut has_error = hooks.use_state(|| false);
    let mut error_text = hooks.use_state(String::new);
    let mut pending_edit = hooks.use_state(|| false);
    let mut pending_save = hooks.use_state(|| false);
    let mut pending_cancel = hooks.use_state(|| false);
    let mut pending_cap_check = hooks.use_state(|| false);

    // Keyboard handling
    hooks.use_terminal_events({
        move |event| {
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

            if !editable {
                match code {
                    KeyCode::Char('e') => pending_edit.set(true),
                    KeyCode::Esc => pending_cancel.set(true),
                    _ => {}
                }
                return;
            }

            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('s') {
                pending_save.set(true);
                return;
            }

            match code {
                KeyCode::Esc => {
                    pending_cancel.set(true);
                    return;
                }
                KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                    focused_field.set(focused_field.get().prev());
                    return;
                }
                KeyCode::Tab => {
                    focused_field.set(focused_field.get().next());
                    return;
                }
                KeyCode::BackTab => {
                    focused_field.set(focused_field.get().prev());
                    return;
                }
                _ => {}
            }

            match focused_field.get() {
                EditField::Title => handle_text_input(&mut title, code),
                EditField::Deadline => handle_text_input(&mut deadline_input, code),
                EditField::Body => {
                    handle_body_input(&mut body, code);
                    pending_cap_check.set(true);
                }
            }
        }
    });

    // Drive the editor model with the queued interactions.
    let apply = |action: EditorAction| -> Vec<EditorEvent> {
        match board {
            Some(mut b) => {
                let mut st = { b.read().clone() };
                let events = apply_editor_action(&mut st, action);
                b.set(st);
                events
            }
            None => vec![],
        }
    };

    if pending_edit.get() {
        pending_edit.set(false);
        apply(EditorAction::TapEdit);
    }

    if pending_cap_check.get() {
        pending_cap_check.set(false);
        let len = body.to_string().chars().count();
        let events = apply(EditorAction::EnterText { len });
        if events.contains(&EditorEvent::DiscardLastInput) {
            let mut val = body.to_string();
            val.pop();
            body.set(val);
        }
    }

    if pending_cancel.get() {
        pending_cancel.set(false);
        apply(EditorAction::TapCancel);
    }

    if pending_save.get() {
        pending_save.set(false);
        let raw = deadline_input.to_string();
        match raw.trim().parse::<Date>() {
            Ok(deadline) => {
                has_error.set(false);
                apply(EditorAction::TapSave {
                    title: title.to_string(),
                    body: body.to_string(),
                    deadline,
                });
            }
            Err(_) => {
                has_error.set(true);
                error_text.set(TriptychError::InvalidDeadline(raw.trim().to_string()).to_string());
            }
        }
    }

    let field_label_color = |field: EditField| {
        if editable && focused_field.get() == field {
            theme.border_focused
        } else {
            theme.text_dimmed
        }
    };
    let field_border_color = |field: EditField| {
        if editable && focused_field.get() == field {
            theme.border_focused
        } else {
            theme.border
        }
    };
    let cursor = |field: EditField| {
        if editable && focused_field.get() == field {
            "_"
        } else {
            ""
        }
    };

    let shortcuts = if editable {
        edit_shortcuts()
    } else {
        read_shortcuts()
    };

    element! {
        // Modal backdrop
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: Color::Rgb { r: 80, g: 80, b: 80 },
        ) {
            // Modal content
            View(
                width: 90pct,
                height: 90pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                background_color: theme.background,
            ) {
                // Header
                View(
                    width: 100pct,
                    height: 1,
                    padding_left: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    background_color: theme.border,
                ) {
                    Text(
                        content: header_title,
                        color: theme.text,
                        weight: Weight::Bold,
                    )
                }

                // Error message (if any)
                #(if has_error.get() {
                    Some(element! {
                        View(
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                            margin_top: 1,
                        ) {
                            Text(
                                content: error_text.to_string(),
                                color: theme.overdue,
                            )
                        }
                    })
                } else {
                    None
                })

                // Form content
                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    padding: 1,
                    flex_direction: FlexDirection::Column,
                    gap: 1,
                    overflow: Overflow::Hidden,
                ) {
                    // Title field
                    View(flex_direction: FlexDirection::Column) {
                        Text(
                            content: "Title:",
                            color: field_label_color(EditField::Title),
                        )
                        View(
                            border_style: BorderStyle::Round,
                            border_color: field_border_color(EditField::Title),
                            padding_left: 1,
                            padding_right: 1,
                            width: 100pct,
                        ) {
                            Text(
                                content: format!("{}{}", title.to_string(), cursor(EditField::Title)),
                                color: theme.text,
                            )
                        }
                    }

                    // Deadline field
                    View(flex_direction: FlexDirection::Column) {
                        Text(
                            content: "Deadline (YYYY-MM-DD):",
                            color: field_label_color(EditField::Deadline),
                        )
                        View(
                            border_style: BorderStyle::Round,
                            border_color: field_border_color(EditField::Deadline),
                            padding_left: 1,
                            padding_right: 1,
                            min_width: 16,
                        ) {
                            Text(
                                content: format!("{}{}", deadline_input.to_string(), cursor(EditField::Deadline)),
                                color: theme.text,
                            )
                        }
                    }

                    // Body field
                    Text(
                        content: "Body:",
                        color: field_label_color(EditField::Body),
                    )
                    View(
                        flex_grow: 1.0,
                        width: 100pct,
                        border_style: BorderStyle::Round,
                        border_color: field_border_color(EditField::Body),
                        padding: 1,
                        overflow: Overflow::Hidden,
                    ) {
                        View(flex_direction: FlexDirection::Column, height: 100pct) {
                            #({
                                let body_text = body.to_string();
                                let is_body_focused = editable && focused_field.get() == EditField::Body;
                                let mut elements: Vec<AnyElement<'static>> = body_text
                                    .lines()
                                    .map(|line| {
                                        let line_owned = line.to_string();
                                        element! {
                                            Text(content: line_owned, color: theme.text)
                                        }
                                        .into()
                                    })
                                    .collect();
                                if is_body_focused {
                                    elements.push(element! {
                                        Text(content: "_", color: theme.highlight)
                                    }.into());
                                }
                                elements
                            })
                        }
                    }
                }

                // Footer
                Footer(shortcuts: shortcuts)
            }
        }
    }
}

/// Handle text input for single-line fields
fn handle_text_input(state: &mut State<String>, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            let mut val = state.to_string();
            val.push(c);
            state.set(val);
        }
        KeyCode::Backspace => {
            let mut val = state.to_string();
            val.pop();
            state.set(val);
        }
        _ => {}
    }
}

/// Handle text input for the multi-line body field
fn handle_body_input(state: &mut State<String>, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            let mut val = state.to_string();
            val.push(c);
            state.set(val);
        }
        KeyCode::Enter => {
            let mut val = state.to_string();
            val.push('\n');
            state.set(val);
        }
        KeyCode::Backspace => {
            let mut val = state.to_string();
            val.pop();
            state.set(val);
        }
        _ => {}
    }
}
