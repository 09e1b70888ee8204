//! Issue Checklist Domain Library
//!
//! Core types and interfaces for the project item checklist webhook.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Webhook payload, issue details, checklist template, outcomes
//!   - `services/`: Signature verification and event filtering
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `github`: Issue lookup and update against the GitHub API
//!   - `checklist_source`: Where the checklist template comes from
//!
//! # Usage
//!
//! ```rust,ignore
//! use issue_checklist::{evaluate, verify_signature, FilterDecision, WebhookPayload};
//!
//! if verify_signature(&raw_body, header, &secret) {
//!     let value: serde_json::Value = serde_json::from_slice(&raw_body)?;
//!     let payload = WebhookPayload::from_value(&value);
//!     if let FilterDecision::Proceed { content_node_id } = evaluate(&payload, &project_id) {
//!         // resolve + update
//!     }
//! }
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    evaluate, sign_payload, verify_signature, ChecklistError, ChecklistTemplate, FilterDecision,
    IssueDetails, IssueLocation, ProcessOutcome, ProjectItem, SkipReason, UpdateOutcome,
    WebhookPayload, CREATED_ACTION, SIGNATURE_HEADER,
};
pub use ports::{ChecklistSource, GitHubIssues};
