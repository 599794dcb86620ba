use simple_webhook_relay::notify::DiscordNotifier;
use simple_webhook_relay::{AppConfig, AppState, router};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt::init();

    if config.discord_webhook_url.is_empty() {
        warn!("DISCORD_WEBHOOK_URL is not set; Discord delivery will fail");
    }

    let notifier = DiscordNotifier::new(config.discord_webhook_url.clone());
    let state = Arc::new(AppState { config, notifier });
    let app = router(state.clone());

    info!("Listening on {}", state.config.bind_address);
    let listener = tokio::net::TcpListener::bind(&state.config.bind_address)
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}
