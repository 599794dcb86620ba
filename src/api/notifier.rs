//! Webhook handler for GitHub events, fire-and-forget variant

use axum::Json;
use axum::body::Bytes;
use axum::extract::State as AxumState;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use tracing::debug;

use crate::SharedState;
use crate::error::Result;
use crate::event::GitHubEvent;
use crate::message::describe;

/// Handles the GitHub webhook POST request without tying the response to
/// the Discord outcome: the caller always gets 200 with the formatted
/// message. A missing or unparsable body is treated as an empty payload.
pub async fn handle_notify(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let event_name = headers
        .get("x-github-event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let payload: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));
    debug!("Received {} event: {:?}", event_name, payload);

    let event = GitHubEvent::parse(event_name, &payload)?;
    let message = describe(&event);

    // Rejected deliveries are already logged by the notifier; only
    // transport failures abort the request.
    state.notifier.notify(&message).await?;

    Ok(Json(json!({ "message": message })))
}
