//! Shared helpers for handler and client tests: in-process HTTP servers and a
//! ready-made `AppState`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::to_bytes, response::Response, Router};
use serde_json::Value;

use crate::config::Config;
use crate::github_client::RepositoryClient;
use crate::profile::ProfileStore;
use crate::proxy::secrets::SecretStore;
use crate::state::AppState;

/// A secret store with a fixed answer.
pub struct StaticSecretStore(pub Option<String>);

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn get(&self, _name: &str) -> Option<String> {
        self.0.clone()
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn test_config(api_base: &str, proxy_url: &str) -> Config {
    let mut config = Config::from_lookup(|_| None).unwrap();
    config.github_api_base = api_base.to_string();
    config.github_proxy_url = proxy_url.to_string();
    config.github_username = "octo".to_string();
    config.profile_latency_ms = 0;
    config
}

/// State whose gateway forwards to `api_base` and whose repository client
/// calls the gateway at `proxy_url`.
pub fn test_state(api_base: &str, proxy_url: &str, token: Option<&str>) -> AppState {
    let config = test_config(api_base, proxy_url);
    AppState {
        http: reqwest::Client::new(),
        secrets: Arc::new(StaticSecretStore(token.map(String::from))),
        github: RepositoryClient::new(config.github_proxy_url.clone(), "octo".to_string())
            .unwrap(),
        profile: ProfileStore::new(Duration::ZERO),
        config,
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
