//! Reviewer roster: annotation grammar, status aggregation and roster diffing.

mod aggregate;
mod annotation;
mod diff;

pub use aggregate::aggregate;
pub use annotation::parse_annotation;
pub use diff::roster_equals;

use serde::{Deserialize, Serialize};

/// Role requested by an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ReviewerType {
    Reviewer,
    Approver,
}

impl ReviewerType {
    /// Parse a cell of a rendered table. Anything that is not `Approver`
    /// is treated as `Reviewer`, since hand-edited cells get refreshed anyway.
    pub fn from_table_cell(cell: &str) -> Self {
        cell.parse().unwrap_or(ReviewerType::Reviewer)
    }
}

impl std::fmt::Display for ReviewerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewerType::Reviewer => write!(f, "Reviewer"),
            ReviewerType::Approver => write!(f, "Approver"),
        }
    }
}

impl std::str::FromStr for ReviewerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Reviewer" => Ok(ReviewerType::Reviewer),
            "Approver" => Ok(ReviewerType::Approver),
            _ => Err(format!("Unknown reviewer type: {}", s)),
        }
    }
}

/// Review progress. The ordering is precedence: a higher status is never
/// demoted by lower-precedence evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum ReviewStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Approved,
}

impl ReviewStatus {
    /// Parse a cell of a rendered table, falling back to `Not Started`.
    pub fn from_table_cell(cell: &str) -> Self {
        cell.parse().unwrap_or(ReviewStatus::NotStarted)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::NotStarted => write!(f, "Not Started"),
            ReviewStatus::InProgress => write!(f, "In Progress"),
            ReviewStatus::Approved => write!(f, "Approved"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(ReviewStatus::NotStarted),
            "In Progress" => Ok(ReviewStatus::InProgress),
            "Approved" => Ok(ReviewStatus::Approved),
            _ => Err(format!("Unknown review status: {}", s)),
        }
    }
}

/// A reviewer requested by an annotation. `name` is the identity key;
/// `email` and `team` are descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReviewerInfo {
    pub email: String,
    pub name: String,
    #[serde(rename = "type")]
    pub reviewer_type: ReviewerType,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReviewerInfoStatus {
    pub info: ReviewerInfo,
    pub status: ReviewStatus,
}

impl ReviewerInfoStatus {
    pub fn is_approved(&self) -> bool {
        self.status == ReviewStatus::Approved
    }
}

/// Per-status counts over a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub approved: usize,
}

impl RosterSummary {
    pub fn from_roster(roster: &[ReviewerInfoStatus]) -> Self {
        let mut s = RosterSummary::default();
        for entry in roster {
            s.total += 1;
            match entry.status {
                ReviewStatus::NotStarted => s.not_started += 1,
                ReviewStatus::InProgress => s.in_progress += 1,
                ReviewStatus::Approved => s.approved += 1,
            }
        }
        s
    }

    /// True when every requested approver has approved. A roster without
    /// approvers is never complete.
    pub fn all_approved(roster: &[ReviewerInfoStatus]) -> bool {
        let mut approvers = roster
            .iter()
            .filter(|r| r.info.reviewer_type == ReviewerType::Approver)
            .peekable();
        approvers.peek().is_some() && approvers.all(|r| r.is_approved())
    }
}
