use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use creative_clicks_web::cache::AppCache;
use creative_clicks_web::config::Config;
use creative_clicks_web::mailer::ResendMailer;
use creative_clicks_web::routes::{self, pages};
use creative_clicks_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber so RUST_LOG can be set there
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    let config = Config::from_env();
    if !config.mail_configured() {
        tracing::warn!(
            "RESEND_API_KEY or RECIPIENT_EMAIL not set in .env. Booking emails will fail until configured."
        );
    }

    let mailer = ResendMailer::from_config(&config).context("Failed to build Resend client")?;
    let cache = AppCache::new();
    pages::warm_pages(&cache).await;

    let bind_addr = config.bind_addr.clone();
    let state = AppState {
        config: Arc::new(config),
        cache,
        mailer,
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, routes::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
