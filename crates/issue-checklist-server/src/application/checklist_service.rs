//! Checklist Application Service (Use Case)
//!
//! Resolves the issue behind a project item and appends the checklist to it
//! unless it is already there. Failures are logged here and reported as a
//! `ProcessOutcome`; they never reach the webhook caller as an error status.

use std::sync::Arc;
use tracing::{error, info, warn};

use issue_checklist::{
    ChecklistError, ChecklistSource, GitHubIssues, IssueDetails, IssueLocation, ProcessOutcome,
    UpdateOutcome,
};

/// Application service for checklist updates
pub struct ChecklistService<G: GitHubIssues, T: ChecklistSource> {
    github: Arc<G>,
    checklist: Arc<T>,
}

impl<G: GitHubIssues, T: ChecklistSource> ChecklistService<G, T> {
    pub fn new(github: Arc<G>, checklist: Arc<T>) -> Self {
        Self { github, checklist }
    }

    /// Look up the issue behind a content node id
    pub async fn resolve(
        &self,
        content_node_id: &str,
    ) -> Result<Option<IssueDetails>, ChecklistError> {
        self.github.find_issue(content_node_id).await
    }

    /// Append the checklist to the issue at `issue_url` if it is missing
    ///
    /// Read-then-write with no concurrency control: two deliveries for the
    /// same issue racing each other can both append.
    pub async fn update(
        &self,
        issue_url: &str,
    ) -> Result<(IssueLocation, UpdateOutcome), ChecklistError> {
        let issue = IssueLocation::parse(issue_url)?;
        let body = self.github.get_issue_body(&issue).await?;
        let template = self.checklist.load().await?;

        if template.is_present_in(&body) {
            return Ok((issue, UpdateOutcome::AlreadyPresent));
        }

        let new_body = template.append_to(&body);
        self.github.update_issue_body(&issue, &new_body).await?;

        Ok((issue, UpdateOutcome::ChecklistAdded))
    }

    /// Resolve then update, logging whichever step stops the chain
    pub async fn process(&self, content_node_id: &str) -> ProcessOutcome {
        let details = match self.resolve(content_node_id).await {
            Ok(Some(details)) => details,
            Ok(None) => {
                warn!(content_node_id, "No issue found for content node");
                return ProcessOutcome::IssueNotFound;
            }
            Err(e) => {
                error!(content_node_id, error = %e, "Could not fetch issue details");
                return ProcessOutcome::ResolveFailed;
            }
        };

        match self.update(&details.url).await {
            Ok((issue, outcome)) => {
                match outcome {
                    UpdateOutcome::ChecklistAdded => {
                        info!(issue = %issue, "Checklist added to issue")
                    }
                    UpdateOutcome::AlreadyPresent => {
                        info!(issue = %issue, "Checklist already present, skipping update")
                    }
                }
                ProcessOutcome::Updated { issue, outcome }
            }
            Err(e) => {
                error!(
                    issue_url = %details.url,
                    status = ?e.status(),
                    error = %e,
                    "Failed to update issue"
                );
                ProcessOutcome::UpdateFailed
            }
        }
    }
}
