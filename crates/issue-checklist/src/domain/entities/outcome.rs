//! Outcomes of processing a webhook delivery
//!
//! None of these change the HTTP status returned to GitHub; they only
//! drive logging and the plain-text response body.

use std::fmt;

use super::IssueLocation;

/// Result of the issue update step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Checklist appended and PATCH sent
    ChecklistAdded,
    /// Body already contained the marker; nothing written
    AlreadyPresent,
}

/// Terminal state of resolve + update for one content node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Updated {
        issue: IssueLocation,
        outcome: UpdateOutcome,
    },
    /// Node does not exist or is not an Issue
    IssueNotFound,
    /// GraphQL lookup failed
    ResolveFailed,
    /// REST read/write, URL parsing or template load failed
    UpdateFailed,
}

impl ProcessOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Updated {
                issue,
                outcome: UpdateOutcome::ChecklistAdded,
            } => format!("Checklist added to {}", issue),
            Self::Updated {
                issue,
                outcome: UpdateOutcome::AlreadyPresent,
            } => format!("Checklist already present on {}", issue),
            Self::IssueNotFound => "No issue found for project item".to_string(),
            Self::ResolveFailed => "Could not fetch issue details".to_string(),
            Self::UpdateFailed => "Issue update failed".to_string(),
        }
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
