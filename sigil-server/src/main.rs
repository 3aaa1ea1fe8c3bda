//! sigil-server — certificate issuance and verification service
//!
//! Long-running service that:
//! - Manages certificate templates (CRUD + layout-only patches)
//! - Issues and revokes certificate records
//! - Answers public verification lookups (JSON verdict + QR code PNG)

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sigil_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting sigil-server");

    let state = Arc::new(AppState::new(config.clone())?);
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("sigil-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
