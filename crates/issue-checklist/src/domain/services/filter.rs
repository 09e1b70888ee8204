//! Event filter
//!
//! Decides whether a verified delivery should trigger an issue update.
//! Skipping is a normal outcome, not an error.

use std::fmt;

use crate::domain::entities::{WebhookPayload, CREATED_ACTION};

/// Why a delivery was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Item belongs to another project, or carries no project id
    ProjectMismatch { project_node_id: Option<String> },
    /// Anything other than `created` (edited, archived, deleted, ...)
    ActionNotCreated { action: Option<String> },
    /// Item has no linked content (draft issue)
    MissingContentNodeId,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectMismatch { .. } => f.write_str("Event is not for the configured project"),
            Self::ActionNotCreated { .. } => f.write_str("Action is not 'created'"),
            Self::MissingContentNodeId => f.write_str("Project item has no content node id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Proceed { content_node_id: String },
    Skip(SkipReason),
}

/// Decide what to do with `payload` for the target project
///
/// Checks run in order: project, action, content id.
pub fn evaluate(payload: &WebhookPayload, target_project_node_id: &str) -> FilterDecision {
    let project_node_id = payload.project_node_id();
    if project_node_id != Some(target_project_node_id) {
        return FilterDecision::Skip(SkipReason::ProjectMismatch {
            project_node_id: project_node_id.map(str::to_string),
        });
    }

    if payload.action.as_deref() != Some(CREATED_ACTION) {
        return FilterDecision::Skip(SkipReason::ActionNotCreated {
            action: payload.action.clone(),
        });
    }

    match payload.content_node_id() {
        Some(id) => FilterDecision::Proceed {
            content_node_id: id.to_string(),
        },
        None => FilterDecision::Skip(SkipReason::MissingContentNodeId),
    }
}
