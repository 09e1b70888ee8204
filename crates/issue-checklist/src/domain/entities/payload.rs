//! WebhookPayload - inbound `projects_v2_item` event
//!
//! Only the fields the filter reads are extracted. A field that is missing
//! or has an unexpected JSON type reads as absent, so a well-formed body of
//! any shape reaches the filter instead of failing to parse.

use serde_json::Value;

/// Action value GitHub sends when an item is added to a project
pub const CREATED_ACTION: &str = "created";

/// Body of a `projects_v2_item` webhook delivery
///
/// Untrusted until the signature over the raw body has been verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookPayload {
    pub action: Option<String>,
    pub projects_v2_item: Option<ProjectItem>,
}

/// The project item the event is about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectItem {
    /// Node id of the project the item belongs to
    pub project_node_id: Option<String>,
    /// Node id of the linked content (issue, PR, draft)
    pub content_node_id: Option<String>,
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

impl ProjectItem {
    /// Read an item object; anything other than an object yields `None`
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        Some(Self {
            project_node_id: string_field(value, "project_node_id"),
            content_node_id: string_field(value, "content_node_id"),
        })
    }
}

impl WebhookPayload {
    /// Extract the filter fields from any parsed JSON document
    pub fn from_value(value: &Value) -> Self {
        Self {
            action: string_field(value, "action"),
            projects_v2_item: value
                .get("projects_v2_item")
                .and_then(ProjectItem::from_value),
        }
    }

    pub fn project_node_id(&self) -> Option<&str> {
        self.projects_v2_item
            .as_ref()
            .and_then(|item| item.project_node_id.as_deref())
    }

    pub fn content_node_id(&self) -> Option<&str> {
        self.projects_v2_item
            .as_ref()
            .and_then(|item| item.content_node_id.as_deref())
    }
}
