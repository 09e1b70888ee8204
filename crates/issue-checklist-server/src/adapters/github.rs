//! HTTP GitHub Implementation
//!
//! Talks to the GitHub GraphQL and REST APIs using reqwest.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::{Deserialize, Serialize};

use issue_checklist::{ChecklistError, GitHubIssues, IssueDetails, IssueLocation};

use crate::config::Config;

const ISSUE_QUERY: &str = "query($id: ID!) { node(id: $id) { ... on Issue { url body } } }";
const REST_ACCEPT: &str = "application/vnd.github.v3+json";

/// HTTP implementation of GitHubIssues
pub struct HttpGitHub {
    client: Client,
    api_url: String,
    graphql_url: String,
    token: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: NodeVariables<'a>,
}

#[derive(Serialize)]
struct NodeVariables<'a> {
    id: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<NodeData>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct NodeData {
    node: Option<IssueNode>,
}

/// Empty object when the node is not an Issue
#[derive(Deserialize)]
struct IssueNode {
    url: Option<String>,
    body: Option<String>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Deserialize)]
struct RestIssue {
    body: Option<String>,
}

#[derive(Serialize)]
struct IssueBodyUpdate<'a> {
    body: &'a str,
}

impl HttpGitHub {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("issue-checklist/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url: config.github_api_url.clone(),
            graphql_url: config.graphql_url(),
            token: config.github_token.clone(),
        })
    }

    fn issue_url(&self, issue: &IssueLocation) -> String {
        format!("{}/{}", self.api_url, issue.api_path())
    }

    fn rest(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, REST_ACCEPT)
    }
}

fn transport(e: reqwest::Error) -> ChecklistError {
    ChecklistError::GitHubTransport(e.to_string())
}

/// Turn a non-2xx response into an error carrying status and body text
async fn ensure_success(response: Response) -> Result<Response, ChecklistError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "No response body".to_string());
    Err(ChecklistError::GitHubStatus {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl GitHubIssues for HttpGitHub {
    async fn find_issue(
        &self,
        content_node_id: &str,
    ) -> Result<Option<IssueDetails>, ChecklistError> {
        let request = GraphQlRequest {
            query: ISSUE_QUERY,
            variables: NodeVariables {
                id: content_node_id,
            },
        };

        let response = self
            .client
            .post(&self.graphql_url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        let response: GraphQlResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| ChecklistError::Serialization(e.to_string()))?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            return Err(ChecklistError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        let issue = response
            .data
            .and_then(|data| data.node)
            .and_then(|node| node.url.map(|url| IssueDetails { url, body: node.body }));

        Ok(issue)
    }

    async fn get_issue_body(&self, issue: &IssueLocation) -> Result<String, ChecklistError> {
        let response = self
            .rest(self.client.get(self.issue_url(issue)))
            .send()
            .await
            .map_err(transport)?;

        let issue: RestIssue = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| ChecklistError::Serialization(e.to_string()))?;

        Ok(issue.body.unwrap_or_default())
    }

    async fn update_issue_body(
        &self,
        issue: &IssueLocation,
        body: &str,
    ) -> Result<(), ChecklistError> {
        let response = self
            .rest(self.client.patch(self.issue_url(issue)))
            .json(&IssueBodyUpdate { body })
            .send()
            .await
            .map_err(transport)?;

        ensure_success(response).await?;
        Ok(())
    }
}
