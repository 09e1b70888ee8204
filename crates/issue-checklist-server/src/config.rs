//! Server configuration
//!
//! Read once at startup from the environment (and `.env` if present), then
//! shared read-only with every request.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_TEMPLATE_PATH: &str = "checklist.md";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-wide configuration
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// HMAC key shared with the GitHub webhook
    pub webhook_secret: String,
    /// Token used for both the GraphQL and REST APIs
    pub github_token: String,
    /// Only items of this project trigger an update
    pub project_node_id: String,
    /// API base; GraphQL lives at `<base>/graphql`
    pub github_api_url: String,
    pub template_path: PathBuf,
    /// Timeout applied to every outbound GitHub request
    pub request_timeout: Duration,
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let port = match optional("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let request_timeout = match optional("GITHUB_REQUEST_TIMEOUT_SECS") {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "GITHUB_REQUEST_TIMEOUT_SECS",
                        value: v,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "GITHUB_REQUEST_TIMEOUT_SECS",
                        value: v.clone(),
                        reason: e.to_string(),
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let github_api_url = optional("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if reqwest::Url::parse(&github_api_url).is_err() {
            return Err(ConfigError::Invalid {
                key: "GITHUB_API_URL",
                value: github_api_url,
                reason: "not an absolute URL".to_string(),
            });
        }

        Ok(Self {
            port,
            webhook_secret: required("GITHUB_WEBHOOK_SECRET")?,
            github_token: required("GITHUB_TOKEN")?,
            project_node_id: required("PROJECT_NODE_ID")?,
            github_api_url,
            template_path: optional("CHECKLIST_TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
            request_timeout,
        })
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.github_api_url)
    }
}

// Secrets stay out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("webhook_secret", &"<redacted>")
            .field("github_token", &"<redacted>")
            .field("project_node_id", &self.project_node_id)
            .field("github_api_url", &self.github_api_url)
            .field("template_path", &self.template_path)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
