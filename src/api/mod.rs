//! HTTP handlers for the relay
//!
//! One module per entry point; both call the same formatter and notifier
//! and differ only in body handling and response shape.

pub mod github;
pub mod notifier;

pub use github::handle_webhook;
pub use notifier::handle_notify;

/// GET / liveness check.
pub async fn root() -> &'static str {
    concat!("simple_webhook_relay ", env!("CARGO_PKG_VERSION"))
}
