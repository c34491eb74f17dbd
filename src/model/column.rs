//! Per-column issue list state
//!
//! Each board column owns the ordered sequence of issues for its status.
//! Mutations go through [`ColumnAction`] and come back out as typed
//! [`ColumnEvent`]s, replacing the closure wiring a delegate-based UI would
//! use: the view re-renders from `Rendered`, the parent routes `Deliver`.

use tracing::debug;

use crate::types::{Issue, IssueId, Status};

/// Mutations a column accepts.
#[derive(Debug, Clone)]
pub enum ColumnAction {
    /// Append an issue to the end of the column.
    Add(Issue),
    /// Replace the issue with a matching id.
    Update(Issue),
    /// Remove the issue with a matching id.
    Delete(IssueId),
    /// Remove the issue with a matching id, restamp its status, and hand it
    /// off for delivery to the destination column.
    MoveOut { id: IssueId, to: Status },
}

/// Notifications a column emits after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnEvent {
    /// The column changed; carries the full current sequence and its count.
    Rendered { issues: Vec<Issue>, count: usize },
    /// An issue was deleted from the column.
    Removed { issue: Issue },
    /// An issue left the column and must be re-added to the column matching
    /// its new status.
    Deliver { issue: Issue },
}

/// Ordered issue list for one status column. The column is the sole owner of
/// its sequence; nothing else mutates it.
#[derive(Debug, Clone)]
pub struct ColumnModel {
    status: Status,
    issues: Vec<Issue>,
}

impl ColumnModel {
    pub fn new(status: Status) -> Self {
        ColumnModel {
            status,
            issues: Vec::new(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Apply a mutation, returning the resulting events.
    ///
    /// Actions referencing an id not present in the column are silent
    /// no-ops and return no events.
    pub fn apply(&mut self, action: ColumnAction) -> Vec<ColumnEvent> {
        match action {
            ColumnAction::Add(issue) => {
                debug!(column = %self.status, id = %issue.id, "add issue");
                self.issues.push(issue);
                vec![self.rendered()]
            }
            ColumnAction::Update(issue) => {
                match self.issues.iter_mut().find(|i| i.id == issue.id) {
                    Some(slot) => {
                        *slot = issue;
                        vec![self.rendered()]
                    }
                    None => {
                        debug!(column = %self.status, id = %issue.id, "update for absent id ignored");
                        vec![]
                    }
                }
            }
            ColumnAction::Delete(id) => match self.position(id) {
                Some(pos) => {
                    let issue = self.issues.remove(pos);
                    debug!(column = %self.status, id = %issue.id, "delete issue");
                    vec![ColumnEvent::Removed { issue }, self.rendered()]
                }
                None => vec![],
            },
            ColumnAction::MoveOut { id, to } => match self.position(id) {
                Some(pos) => {
                    let mut issue = self.issues.remove(pos);
                    debug!(column = %self.status, id = %issue.id, to = %to, "move issue out");
                    issue.status = to;
                    vec![ColumnEvent::Deliver { issue }, self.rendered()]
                }
                None => vec![],
            },
        }
    }

    fn position(&self, id: IssueId) -> Option<usize> {
        self.issues.iter().position(|i| i.id == id)
    }

    fn rendered(&self) -> ColumnEvent {
        ColumnEvent::Rendered {
            issues: self.issues.clone(),
            count: self.issues.len(),
        }
    }
}
