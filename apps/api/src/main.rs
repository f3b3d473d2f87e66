mod config;
mod errors;
mod github_client;
mod models;
mod profile;
mod projects;
mod proxy;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::github_client::{RepositoryClient, USER_AGENT};
use crate::profile::ProfileStore;
use crate::proxy::secrets::{EnvSecretStore, FileSecretStore, SecretStore};
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Secret store for the GitHub token (read per request, never cached)
    let secrets: Arc<dyn SecretStore> = match &config.secrets_dir {
        Some(dir) => {
            info!("Reading secrets from {}", dir.display());
            Arc::new(FileSecretStore::new(dir.clone()))
        }
        None => {
            info!("Reading secrets from the environment");
            Arc::new(EnvSecretStore)
        }
    };

    // Outbound client for the gateway; GitHub rejects requests without a User-Agent
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let github = RepositoryClient::new(
        config.github_proxy_url.clone(),
        config.github_username.clone(),
    )?;
    info!(
        "Repository client initialized (account: {}, gateway: {})",
        config.github_username, config.github_proxy_url
    );

    let profile = ProfileStore::new(Duration::from_millis(config.profile_latency_ms));

    let state = AppState {
        config: config.clone(),
        http,
        secrets,
        github,
        profile,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
