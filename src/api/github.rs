//! Webhook handler for GitHub events, delivery-aware variant

use axum::Json;
use axum::extract::State as AxumState;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::SharedState;
use crate::error::Result;
use crate::event::GitHubEvent;
use crate::message::describe;

/// Handles the GitHub webhook POST request.
///
/// Responds 202 once the message has been delivered to Discord and 500 when
/// Discord rejects it. A recognized event with a bad payload is a 400;
/// malformed JSON is rejected by the extractor before we get here.
pub async fn handle_webhook(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Response> {
    let event_name = headers
        .get("x-github-event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let event = GitHubEvent::parse(event_name, &payload)?;
    if let GitHubEvent::Unrecognized { event } = &event {
        warn!("Received unrecognized event {:?}", event);
    }

    let message = describe(&event);
    info!("Received {} event; notifying: {}", event_name, message);

    if state.notifier.notify(&message).await? {
        Ok((StatusCode::ACCEPTED, "Accepted").into_response())
    } else {
        error!("Discord rejected notification for {} event", event_name);
        Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response())
    }
}
