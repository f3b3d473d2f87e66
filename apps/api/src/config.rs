use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "https://adam-wickenden-dev.web.app",
    "https://adam-wickenden.web.app",
];

/// Application configuration loaded from environment variables.
/// Resolved once at startup; every value has a default except the GitHub token,
/// which is read per request through the secret store instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the upstream REST API the gateway forwards to.
    pub github_api_base: String,
    /// Account whose repositories the project listing shows.
    pub github_username: String,
    /// Gateway endpoint the repository client talks to.
    pub github_proxy_url: String,
    /// When set, secrets are read from files in this directory instead of the environment.
    pub secrets_dir: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
    pub profile_latency_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let profile_latency_ms = lookup("PROFILE_LATENCY_MS")
            .unwrap_or_else(|| "100".to_string())
            .parse::<u64>()
            .context("PROFILE_LATENCY_MS must be a number of milliseconds")?;

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            github_api_base: lookup("GITHUB_API_BASE")
                .unwrap_or_else(|| "https://api.github.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            github_username: lookup("GITHUB_USERNAME")
                .unwrap_or_else(|| "adamwickenden".to_string()),
            github_proxy_url: lookup("GITHUB_PROXY_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}/githubProxy")),
            secrets_dir: lookup("SECRETS_DIR")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            allowed_origins,
            profile_latency_ms,
        })
    }
}
