//! ChecklistTemplate - text appended to issue bodies exactly once
//!
//! The first line doubles as the idempotence marker: a body that already
//! contains it is left alone.

use crate::domain::errors::ChecklistError;

/// Separator placed between the existing body and the checklist
pub const CHECKLIST_SEPARATOR: &str = "\n\n";

/// Checklist template loaded from its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistTemplate {
    pub first_line: String,
    pub full_content: String,
}

impl ChecklistTemplate {
    /// Build a template from raw file content
    ///
    /// A blank first line would match every body, so it is rejected.
    pub fn parse(content: impl Into<String>) -> Result<Self, ChecklistError> {
        let full_content = content.into();
        let first_line = full_content.lines().next().unwrap_or_default().to_string();

        if first_line.trim().is_empty() {
            return Err(ChecklistError::Template(
                "first line of the checklist template is empty".to_string(),
            ));
        }

        Ok(Self {
            first_line,
            full_content,
        })
    }

    /// Whether `body` already carries this checklist
    pub fn is_present_in(&self, body: &str) -> bool {
        body.contains(&self.first_line)
    }

    /// New issue body with the checklist appended
    pub fn append_to(&self, body: &str) -> String {
        format!("{}{}{}", body, CHECKLIST_SEPARATOR, self.full_content)
    }
}
