//! Checklist Source Port
//!
//! Where the checklist template is read from. Implementations must not
//! cache: the template is reloaded on every update attempt so edits take
//! effect without a restart.

use async_trait::async_trait;

use crate::domain::entities::ChecklistTemplate;
use crate::domain::errors::ChecklistError;

#[async_trait]
pub trait ChecklistSource: Send + Sync {
    /// Load the current template
    async fn load(&self) -> Result<ChecklistTemplate, ChecklistError>;
}
