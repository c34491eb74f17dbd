//! Board coordinator
//!
//! Owns the three columns and relays issues between them. A column never
//! talks to another column directly; it emits `Deliver` and the coordinator
//! re-adds the issue to the column matching its new status.

use tracing::debug;

use crate::model::column::{ColumnAction, ColumnEvent, ColumnModel};
use crate::types::{Issue, IssueId, Status};

#[derive(Debug, Clone)]
pub struct Board {
    columns: [ColumnModel; 3],
}

impl Board {
    pub fn new() -> Self {
        Board {
            columns: Status::ALL.map(ColumnModel::new),
        }
    }

    pub fn column(&self, status: Status) -> &ColumnModel {
        &self.columns[status.index()]
    }

    /// Dispatch an action to one column, relaying any `Deliver` back onto the
    /// board. Returns the events for the caller (the view layer) to render
    /// from; relayed deliveries surface as the destination column's events.
    pub fn apply(&mut self, status: Status, action: ColumnAction) -> Vec<ColumnEvent> {
        let events = self.columns[status.index()].apply(action);
        let mut out = Vec::with_capacity(events.len());
        for event in events {
            match event {
                ColumnEvent::Deliver { issue } => {
                    debug!(from = %status, to = %issue.status, id = %issue.id, "relay issue");
                    out.extend(self.deliver(issue));
                }
                other => out.push(other),
            }
        }
        out
    }

    /// Add an issue to the column matching its status.
    pub fn deliver(&mut self, issue: Issue) -> Vec<ColumnEvent> {
        self.columns[issue.status.index()].apply(ColumnAction::Add(issue))
    }

    /// Replace an issue in the column matching its status. The editor cannot
    /// change status, so this is always the column the issue came from.
    pub fn update(&mut self, issue: Issue) -> Vec<ColumnEvent> {
        self.columns[issue.status.index()].apply(ColumnAction::Update(issue))
    }

    pub fn find(&self, id: IssueId) -> Option<&Issue> {
        self.columns
            .iter()
            .flat_map(|c| c.issues())
            .find(|i| i.id == id)
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(ColumnModel::len).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
