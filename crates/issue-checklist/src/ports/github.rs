//! GitHub Issues Port
//!
//! Abstract interface over the two GitHub APIs the webhook touches:
//! GraphQL for turning a content node id into an issue, REST for reading
//! and rewriting the issue body.

use async_trait::async_trait;

use crate::domain::entities::{IssueDetails, IssueLocation};
use crate::domain::errors::ChecklistError;

/// GitHub issue access
///
/// # Example
///
/// ```rust,ignore
/// use issue_checklist::ports::GitHubIssues;
///
/// struct HttpGitHub { /* reqwest client */ }
///
/// #[async_trait]
/// impl GitHubIssues for HttpGitHub {
///     async fn find_issue(&self, content_node_id: &str)
///         -> Result<Option<IssueDetails>, ChecklistError>
///     {
///         // POST node(id) query to /graphql
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait GitHubIssues: Send + Sync {
    /// Look up the issue behind a project item's content node
    ///
    /// Returns `Ok(None)` when the node does not exist or is not an Issue.
    /// Transport failures and GraphQL error lists are errors.
    async fn find_issue(&self, content_node_id: &str)
        -> Result<Option<IssueDetails>, ChecklistError>;

    /// Fetch the current issue body; a null body is returned as empty
    async fn get_issue_body(&self, issue: &IssueLocation) -> Result<String, ChecklistError>;

    /// Replace the issue body
    async fn update_issue_body(
        &self,
        issue: &IssueLocation,
        body: &str,
    ) -> Result<(), ChecklistError>;
}
