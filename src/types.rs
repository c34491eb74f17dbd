use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use uuid::Uuid;

use crate::error::TriptychError;

/// The three fixed board columns, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Todo,
    Doing,
    Done,
}

impl Status {
    /// All statuses in board order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::Doing, Status::Done];

    /// Position of this status on the board (0-2).
    pub fn index(self) -> usize {
        match self {
            Status::Todo => 0,
            Status::Doing => 1,
            Status::Done => 2,
        }
    }

    /// The other two statuses, in board order. Used to build the move menu.
    pub fn others(self) -> [Status; 2] {
        match self {
            Status::Todo => [Status::Doing, Status::Done],
            Status::Doing => [Status::Todo, Status::Done],
            Status::Done => [Status::Todo, Status::Doing],
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Todo => write!(f, "todo"),
            Status::Doing => write!(f, "doing"),
            Status::Done => write!(f, "done"),
        }
    }
}

impl FromStr for Status {
    type Err = TriptychError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "doing" => Ok(Status::Doing),
            "done" => Ok(Status::Done),
            _ => Err(TriptychError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["todo", "doing", "done"];

/// Opaque, immutable issue identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssueId(Uuid);

impl IssueId {
    pub fn new() -> Self {
        IssueId(Uuid::new_v4())
    }

    /// Short form for card display (first segment of the uuid).
    pub fn short(&self) -> String {
        let s = self.0.to_string();
        s.split('-').next().unwrap_or(&s).to_string()
    }
}

impl Default for IssueId {
    fn default() -> Self {
        IssueId::new()
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single trackable unit of work.
///
/// Equality and hashing cover the id plus the value fields; this is used for
/// UI diffing, not business identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue {
    pub id: IssueId,
    pub status: Status,
    pub title: String,
    pub body: String,
    pub deadline: Date,
}

impl Issue {
    /// Construct a freshly-created issue. New issues always start in To-Do,
    /// regardless of which column's affordance opened the editor.
    pub fn new(title: impl Into<String>, body: impl Into<String>, deadline: Date) -> Self {
        Issue {
            id: IssueId::new(),
            status: Status::Todo,
            title: title.into(),
            body: body.into(),
            deadline,
        }
    }

    /// Whether the deadline has passed. Done issues are never overdue.
    pub fn is_overdue(&self, today: Date) -> bool {
        self.status != Status::Done && self.deadline < today
    }
}

impl Default for Issue {
    fn default() -> Self {
        Issue::new("", "", Date::default())
    }
}
