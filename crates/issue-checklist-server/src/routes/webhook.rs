//! Webhook Route - GitHub project item deliveries
//!
//! Verifies the delivery signature over the raw body, filters on the
//! payload, then hands the content node id to the checklist service.
//! Only a bad signature (403) or an unparseable body (400) produce a
//! non-200 response.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tracing::{info, warn};

use issue_checklist::{
    evaluate, verify_signature, FilterDecision, SkipReason, WebhookPayload, SIGNATURE_HEADER,
};

use crate::AppState;

const EVENT_HEADER: &str = "x-github-event";
const DELIVERY_HEADER: &str = "x-github-delivery";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Receive a GitHub webhook delivery
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, String), (StatusCode, String)> {
    let github_event = header_str(&headers, EVENT_HEADER).unwrap_or("-");
    let delivery = header_str(&headers, DELIVERY_HEADER).unwrap_or("-");

    let signature = header_str(&headers, SIGNATURE_HEADER);
    if !verify_signature(&body, signature, &state.config.webhook_secret) {
        warn!(
            github_event,
            delivery,
            has_signature = signature.is_some(),
            "Webhook signature mismatch"
        );
        return Err((StatusCode::FORBIDDEN, "Invalid signature".to_string()));
    }

    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(github_event, delivery, error = %e, "Webhook body is not valid JSON");
        (StatusCode::BAD_REQUEST, format!("Invalid JSON payload: {}", e))
    })?;
    let payload = WebhookPayload::from_value(&value);

    let content_node_id = match evaluate(&payload, &state.config.project_node_id) {
        FilterDecision::Proceed { content_node_id } => content_node_id,
        FilterDecision::Skip(reason) => {
            match &reason {
                SkipReason::ProjectMismatch { project_node_id } => info!(
                    github_event,
                    delivery,
                    project_node_id = project_node_id.as_deref().unwrap_or("-"),
                    "Skipping event for another project"
                ),
                SkipReason::ActionNotCreated { action } => info!(
                    github_event,
                    delivery,
                    action = action.as_deref().unwrap_or("-"),
                    "Skipping non-created action"
                ),
                SkipReason::MissingContentNodeId => warn!(
                    github_event,
                    delivery, "Project item created without content node id"
                ),
            }
            return Ok((StatusCode::OK, reason.to_string()));
        }
    };

    info!(
        github_event,
        delivery,
        content_node_id = %content_node_id,
        "Project item created, applying checklist"
    );

    let outcome = state.checklist_service.process(&content_node_id).await;

    Ok((StatusCode::OK, outcome.message()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", post(receive_webhook))
}
