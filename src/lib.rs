pub mod api;
pub mod error;
pub mod event;
pub mod message;
pub mod notify;

use axum::{Router, routing};
use std::sync::Arc;

use crate::error::{RelayError, Result};
use crate::notify::DiscordNotifier;

/// Runtime configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_webhook_url: String,
    pub bind_address: String,
}

impl AppConfig {
    /// Loads configuration from the environment. `DISCORD_WEBHOOK_URL`
    /// falls back to an empty string, in which case delivery fails until it
    /// is set. `PORT` is required.
    pub fn from_env() -> Result<Self> {
        let discord_webhook_url = std::env::var("DISCORD_WEBHOOK_URL").unwrap_or_default();

        let port = std::env::var("PORT")
            .map_err(|_| RelayError::ConfigError("PORT is not set".to_string()))?;
        let port: u16 = port
            .parse()
            .map_err(|_| RelayError::ConfigError(format!("Invalid PORT value '{}'", port)))?;

        Ok(Self {
            discord_webhook_url,
            bind_address: format!("0.0.0.0:{}", port),
        })
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub notifier: DiscordNotifier,
}

pub type SharedState = Arc<AppState>;

/// Builds the HTTP router with both webhook entry points.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", routing::get(api::root))
        .route("/api/github", routing::post(api::handle_webhook))
        .route("/api/notifier", routing::post(api::handle_notify))
        .with_state(state)
}
