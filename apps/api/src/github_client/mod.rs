//! Repository Client: the single point of entry for GitHub data on the site.
//!
//! All calls go through the proxy gateway, never to GitHub directly, so the
//! token stays server-side. Results are fetched and enriched from scratch on
//! every call; nothing is cached.

use anyhow::Result;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::models::repository::{EnrichedRepository, FetchOptions, RawCommit, RawRepository};
use crate::projects::enrich;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// `error` value the gateway uses when it has no token.
const TOKEN_NOT_CONFIGURED: &str = "GitHub token not configured";

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub token not configured on server. Please contact the administrator.")]
    Configuration,

    #[error("GitHub API rate limit exceeded. Resets at {}.", .reset.format("%H:%M:%S UTC"))]
    RateLimited { reset: DateTime<Utc> },

    #[error("Failed to fetch GitHub repositories. Please try again later.")]
    Upstream { status: u16, message: String },

    #[error("Failed to fetch GitHub repositories. Please try again later.")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Client for the repository listing shown on the projects page.
#[derive(Clone)]
pub struct RepositoryClient {
    client: Client,
    proxy_url: String,
    username: String,
}

impl RepositoryClient {
    pub fn new(proxy_url: String, username: String) -> Result<Self> {
        Ok(Self {
            client: Client::builder().user_agent(USER_AGENT).build()?,
            proxy_url,
            username,
        })
    }

    /// Public, non-fork repositories of the configured account, enriched and
    /// sorted by latest commit (newest first).
    ///
    /// Only a failure of the listing itself is returned as an error; a failed
    /// commit lookup falls back to the repository's push time.
    pub async fn fetch_repositories(
        &self,
        options: &FetchOptions,
    ) -> Result<Vec<EnrichedRepository>, GithubError> {
        let path = format!("users/{}/repos", self.username);
        let repos: Vec<RawRepository> = self
            .get_json(&path, &options.query_pairs())
            .await
            .map_err(|e| {
                error!("Error fetching repositories: {e:?}");
                e
            })?;

        let listed = repos.len();
        let public: Vec<RawRepository> = repos
            .into_iter()
            .filter(|repo| !repo.private && !repo.fork)
            .collect();

        let mut enriched = join_all(public.into_iter().map(|repo| async move {
            let last_commit = self
                .fetch_latest_commit(&repo.owner.login, &repo.name)
                .await
                .and_then(|commit| commit.author_date())
                .unwrap_or_else(|| repo.fallback_timestamp());
            enrich(repo, last_commit)
        }))
        .await;

        // Stable: repositories with equal timestamps keep the listing order.
        enriched.sort_by(|a, b| b.last_commit_date.cmp(&a.last_commit_date));

        info!(
            listed,
            shown = enriched.len(),
            "Fetched repositories for {}",
            self.username
        );
        Ok(enriched)
    }

    /// Most recent commit of `owner/repo`, or `None` if the lookup fails or the
    /// repository has no commits.
    pub async fn fetch_latest_commit(&self, owner: &str, repo: &str) -> Option<RawCommit> {
        let path = format!("repos/{owner}/{repo}/commits");
        match self
            .get_json::<Vec<RawCommit>>(&path, &[("per_page", "1".to_string())])
            .await
        {
            Ok(commits) => {
                let latest = commits.into_iter().next();
                if latest.is_none() {
                    warn!(%repo, "No commits returned for repository");
                }
                latest
            }
            Err(e) => {
                warn!(%repo, "Failed to fetch latest commit: {e:?}");
                None
            }
        }
    }

    /// Current GitHub rate-limit document, if the gateway will serve it.
    pub async fn rate_limit(&self) -> Option<Value> {
        match self.get_json::<Value>("rate_limit", &[]).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error fetching rate limit: {e:?}");
                None
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, GithubError> {
        let response = self.proxy_request(path, params).await?;
        Ok(response.json::<T>().await?)
    }

    /// Makes a GET through the gateway and maps failure statuses to `GithubError`.
    async fn proxy_request(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Response, GithubError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        query.push(("path", path));
        query.extend(params.iter().map(|(k, v)| (*k, v.as_str())));

        let response = self
            .client
            .get(&self.proxy_url)
            .header("Accept", "application/json")
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        debug!(%path, status = status.as_u16(), "Gateway responded");
        if status.is_success() {
            return Ok(response);
        }

        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> GithubError {
    let status = response.status().as_u16();
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    let remaining = header("x-ratelimit-remaining");
    let reset = header("x-ratelimit-reset");

    if status == 403 && remaining.as_deref() == Some("0") {
        if let Some(reset) = reset.as_deref().and_then(parse_reset) {
            return GithubError::RateLimited { reset };
        }
    }

    let body = response.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<GatewayErrorBody>(&body).ok();

    if status == 500
        && parsed.as_ref().and_then(|b| b.error.as_deref()) == Some(TOKEN_NOT_CONFIGURED)
    {
        return GithubError::Configuration;
    }

    let message = parsed
        .and_then(|b| b.error.or(b.message))
        .unwrap_or(body);
    GithubError::Upstream { status, message }
}

/// `x-ratelimit-reset` is a Unix timestamp in seconds.
fn parse_reset(raw: &str) -> Option<DateTime<Utc>> {
    let seconds = raw.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0)
}
