//! Discord incoming-webhook delivery

use serde::Serialize;
use tracing::{debug, error};

use crate::error::Result;

/// JSON body accepted by a Discord incoming webhook.
#[derive(Debug, Serialize)]
struct DiscordMessage<'a> {
    content: &'a str,
}

/// Sends notification messages to a single Discord incoming webhook.
pub struct DiscordNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

impl DiscordNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }

    /// Delivers one message. Returns `Ok(true)` on a 2xx response and
    /// `Ok(false)` on any other status. Transport failures (DNS, refused
    /// connection, unusable URL) are returned as errors.
    pub async fn notify(&self, message: &str) -> Result<bool> {
        let body = DiscordMessage { content: message };

        debug!("Sending notification to Discord");
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(true);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        error!("Error sending message to discord: {} {:?}", status, text);
        Ok(false)
    }
}
