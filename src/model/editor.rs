//! Modal editor state machine
//!
//! Covers three states: creating a new issue, viewing an existing issue
//! read-only, and editing an existing issue. The mode is a tagged variant so
//! "existing but not yet editable" cannot be confused with "new".

use jiff::civil::Date;

use crate::types::{Issue, Status};

/// Hard cap on body length, in characters.
pub const MAX_BODY_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Creating a brand-new issue. Always editable.
    New,
    /// Viewing or editing an existing issue. Opens read-only.
    Existing { issue: Issue, editing: bool },
}

/// Inputs from the editor view.
#[derive(Debug, Clone)]
pub enum EditorAction {
    /// Unlock an existing issue for editing.
    TapEdit,
    /// Commit the form fields.
    TapSave {
        title: String,
        body: String,
        deadline: Date,
    },
    /// Close without saving.
    TapCancel,
    /// Body text changed; `len` is the character count after the change.
    EnterText { len: usize },
}

/// Outputs for the parent to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A new issue was committed. Its status is always To-Do.
    Created(Issue),
    /// An existing issue was committed with updated fields.
    Updated(Issue),
    /// The editor should close.
    Dismiss,
    /// The body exceeded the cap; the view must drop the character it just
    /// inserted.
    DiscardLastInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorModel {
    mode: EditorMode,
}

impl EditorModel {
    /// Editor for a brand-new issue.
    pub fn new_issue() -> Self {
        EditorModel {
            mode: EditorMode::New,
        }
    }

    /// Editor for an existing issue, opened read-only.
    pub fn existing(issue: Issue) -> Self {
        EditorModel {
            mode: EditorMode::Existing {
                issue,
                editing: false,
            },
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Whether the form fields accept input.
    pub fn is_editable(&self) -> bool {
        match &self.mode {
            EditorMode::New => true,
            EditorMode::Existing { editing, .. } => *editing,
        }
    }

    /// The issue being viewed or edited, if any.
    pub fn issue(&self) -> Option<&Issue> {
        match &self.mode {
            EditorMode::New => None,
            EditorMode::Existing { issue, .. } => Some(issue),
        }
    }

    pub fn apply(&mut self, action: EditorAction) -> Vec<EditorEvent> {
        match action {
            EditorAction::TapEdit => {
                if let EditorMode::Existing { editing, .. } = &mut self.mode {
                    *editing = true;
                }
                vec![]
            }
            EditorAction::TapSave {
                title,
                body,
                deadline,
            } => match &mut self.mode {
                EditorMode::New => {
                    let issue = Issue::new(title, body, deadline);
                    debug_assert_eq!(issue.status, Status::Todo);
                    vec![EditorEvent::Created(issue), EditorEvent::Dismiss]
                }
                EditorMode::Existing { issue, editing } => {
                    if !*editing {
                        return vec![];
                    }
                    issue.title = title;
                    issue.body = body;
                    issue.deadline = deadline;
                    vec![EditorEvent::Updated(issue.clone()), EditorEvent::Dismiss]
                }
            },
            EditorAction::TapCancel => vec![EditorEvent::Dismiss],
            EditorAction::EnterText { len } => {
                if len > MAX_BODY_LEN {
                    vec![EditorEvent::DiscardLastInput]
                } else {
                    vec![]
                }
            }
        }
    }
}
