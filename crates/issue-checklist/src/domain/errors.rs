//! Domain Errors
//!
//! Error types for issue resolution and update.

use thiserror::Error;

/// Errors raised while resolving or updating an issue
#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("GitHub request failed: {0}")]
    GitHubTransport(String),

    #[error("GitHub responded with {status}: {body}")]
    GitHubStatus { status: u16, body: String },

    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Invalid issue URL: {0}")]
    InvalidIssueUrl(String),

    #[error("Checklist template error: {0}")]
    Template(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ChecklistError {
    pub fn invalid_url<T: AsRef<str>>(url: T, reason: &str) -> Self {
        Self::InvalidIssueUrl(format!("{} ({})", url.as_ref(), reason))
    }

    /// HTTP status returned by GitHub, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::GitHubStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
