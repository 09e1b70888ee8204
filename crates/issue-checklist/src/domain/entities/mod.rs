//! Domain Entities
//!
//! Request-scoped values; nothing here is persisted.
//! - WebhookPayload: inbound `projects_v2_item` event
//! - IssueDetails / IssueLocation: the issue a project item points at
//! - ChecklistTemplate: text appended to issue bodies
//! - Outcomes: terminal states of a webhook delivery

mod checklist;
mod issue;
mod outcome;
mod payload;

pub use checklist::*;
pub use issue::*;
pub use outcome::*;
pub use payload::*;
