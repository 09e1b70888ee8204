//! Issue - the GitHub issue backing a project item

use std::fmt;
use url::Url;

use crate::domain::errors::ChecklistError;

/// Issue fields resolved from a content node id
///
/// Fetched fresh for every delivery; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetails {
    pub url: String,
    pub body: Option<String>,
}

/// Owner, repository and number of an issue
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueLocation {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl IssueLocation {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    /// Parse an issue URL by matching its path against the known shapes
    ///
    /// Accepts the REST form `/repos/<owner>/<repo>/issues/<number>` and the
    /// html form `/<owner>/<repo>/issues/<number>` that GraphQL returns.
    pub fn parse(issue_url: &str) -> Result<Self, ChecklistError> {
        let url = Url::parse(issue_url)
            .map_err(|e| ChecklistError::invalid_url(issue_url, &e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChecklistError::invalid_url(issue_url, "not an http(s) URL"));
        }

        let mut segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.collect())
            .unwrap_or_default();
        if segments.last() == Some(&"") {
            segments.pop();
        }

        let (owner, repo, number) = match segments.as_slice() {
            ["repos", owner, repo, "issues", number] => (*owner, *repo, *number),
            [owner, repo, "issues", number] if *owner != "repos" => (*owner, *repo, *number),
            _ => {
                return Err(ChecklistError::invalid_url(
                    issue_url,
                    "expected /repos/<owner>/<repo>/issues/<number>",
                ))
            }
        };

        if owner.is_empty() || repo.is_empty() {
            return Err(ChecklistError::invalid_url(issue_url, "empty owner or repo"));
        }

        let number = number
            .parse::<u64>()
            .map_err(|_| ChecklistError::invalid_url(issue_url, "issue number is not numeric"))?;

        Ok(Self::new(owner, repo, number))
    }

    /// REST path of this issue, relative to the API base
    pub fn api_path(&self) -> String {
        format!("repos/{}/{}/issues/{}", self.owner, self.repo, self.number)
    }
}

impl fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
