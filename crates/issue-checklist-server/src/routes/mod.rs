//! HTTP Routes
//!
//! - / and /health - Liveness
//! - /webhook - GitHub `projects_v2_item` deliveries

pub mod health;
pub mod webhook;
