//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (GitHub, template storage).
//!
//! Implementations of these traits live in the server crate's adapters.

pub mod checklist_source;
pub mod github;

// Re-exports
pub use checklist_source::*;
pub use github::*;
