// Main entry point for the agent API server

use anyhow::{Context, Result};
use social_agent::kernel::{ConversationStore, ServerDeps};
use social_agent::server::{build_app, AxumAppState};
use social_agent::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,social_agent=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Social Media Automation Agent");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(mode = ?config.server_mode, "Configuration loaded");

    let deps = ServerDeps::from_config(&config)
        .await
        .context("Failed to initialize dependencies")?;
    let state = AxumAppState::new(deps, ConversationStore::with_ttl(config.conversation_ttl));

    let app = build_app(state, config.server_mode, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
