//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod github;
pub mod template;

// Re-exports
pub use github::HttpGitHub;
pub use template::FileChecklistSource;
