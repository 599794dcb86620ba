//! Typed GitHub webhook payloads

use serde::Deserialize;
use serde_json::Value;

use crate::error::{RelayError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

/// Payload of a `star` event. `action` is "created" or "deleted".
#[derive(Debug, Clone, Deserialize)]
pub struct StarPayload {
    pub action: String,
    pub sender: User,
    pub repository: Repository,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub title: String,
    pub user: User,
}

/// Payload of an `issues` event.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuePayload {
    pub action: String,
    pub issue: Issue,
}

/// Payload of a `push` event. `before` and `after` are full commit SHAs.
#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    pub before: String,
    pub after: String,
    pub repository: Repository,
    pub sender: User,
    pub forced: bool,
}

/// A GitHub webhook event, tagged by the `x-github-event` header value.
#[derive(Debug, Clone)]
pub enum GitHubEvent {
    Star(StarPayload),
    Issues(IssuePayload),
    Push(PushPayload),
    Unrecognized { event: String },
}

impl GitHubEvent {
    /// Builds a typed event from the header value and the parsed JSON body.
    /// An event name we don't handle is not an error; a recognized event
    /// with a missing or mistyped field is.
    pub fn parse(event: &str, payload: &Value) -> Result<Self> {
        let malformed = |source| RelayError::MalformedPayload {
            event: event.to_string(),
            source,
        };

        match event {
            "star" => serde_json::from_value(payload.clone())
                .map(Self::Star)
                .map_err(malformed),
            "issues" => serde_json::from_value(payload.clone())
                .map(Self::Issues)
                .map_err(malformed),
            "push" => serde_json::from_value(payload.clone())
                .map(Self::Push)
                .map_err(malformed),
            other => Ok(Self::Unrecognized {
                event: other.to_string(),
            }),
        }
    }
}
