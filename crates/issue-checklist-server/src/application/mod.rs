//! Application Services (Use Cases)
//!
//! Orchestrates domain operations using ports.

pub mod checklist_service;

pub use checklist_service::ChecklistService;
