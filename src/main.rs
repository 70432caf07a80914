use puckbot::adapters::TelegramClient;
use puckbot::api::{create_router, AppState};
use puckbot::collector::{AllhockeyClient, PlayerCache};
use puckbot::config::AppConfig;
use puckbot::error::Result;
use puckbot::services::StatsService;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.logging.level);

    info!("Starting puckbot (source: {})", config.source.url);

    let source = AllhockeyClient::new(&config.source)?;
    let cache = PlayerCache::new(source, Duration::from_secs(config.cache.ttl_secs));
    let service = Arc::new(StatsService::new(cache, config.matcher.limit));
    let telegram = TelegramClient::new(&config.telegram);

    if let Some(public_url) = config
        .telegram
        .public_url
        .as_deref()
        .filter(|url| !url.is_empty())
    {
        let webhook_url = format!("{}/tg", public_url.trim_end_matches('/'));
        telegram
            .set_webhook(&webhook_url, &config.telegram.secret)
            .await?;
    }

    let state = AppState::new(service, telegram, config.telegram.secret.clone());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.telegram.port));
    info!("Webhook server listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},puckbot=debug", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
