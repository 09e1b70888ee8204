//! Issue Checklist Server
//!
//! Receives GitHub `projects_v2_item` webhooks and appends a checklist to
//! issues newly added to the configured project.
//!
//! - `config`: environment configuration
//! - `adapters/`: reqwest GitHub client, file-backed checklist template
//! - `application/`: resolve + update use case
//! - `routes/`: axum handlers

pub mod adapters;
pub mod application;
pub mod config;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use adapters::{FileChecklistSource, HttpGitHub};
use application::ChecklistService;
use config::Config;

/// Application service with concrete adapter implementations
pub type AppChecklistService = ChecklistService<HttpGitHub, FileChecklistSource>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub checklist_service: Arc<AppChecklistService>,
}

impl AppState {
    /// Wire adapters and services from configuration
    pub fn from_config(config: Config) -> Result<Self, reqwest::Error> {
        let github = Arc::new(HttpGitHub::new(&config)?);
        let checklist = Arc::new(FileChecklistSource::new(config.template_path.clone()));

        Ok(Self {
            config: Arc::new(config),
            checklist_service: Arc::new(ChecklistService::new(github, checklist)),
        })
    }
}

/// Build the axum Router with all routes and middleware.
/// Used by `main` and available for integration testing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::webhook::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
