//! Agenda Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agenda_engine::{api, infrastructure::config::AppConfig, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from the working directory, if present.
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agenda_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Agenda Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Database: {}", config.database_path.display());

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context("SERVER_HOST and SERVER_PORT must form a socket address")?;

    let app = Arc::new(App::new(config));
    app.storage.ensure_schema().await?;

    let router = api::router(app);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
