//! GitHub proxy gateway: validates the requested API path, attaches the
//! server-held token and relays the GitHub response.
//! The token never leaves this module and is never logged.

pub mod handlers;
pub mod secrets;

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::errors::AppError;

/// Only these GitHub API path prefixes may be proxied.
pub const ALLOWED_PATH_PREFIXES: &[&str] = &["users/", "repos/"];

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const RATE_LIMIT_HEADER_PREFIX: &str = "x-ratelimit-";

/// Splits the inbound query into the GitHub path and the parameters to forward.
/// Only the first `path` is used; later ones are dropped.
pub fn split_query(params: Vec<(String, String)>) -> (Option<String>, Vec<(String, String)>) {
    let mut path = None;
    let mut forwarded = Vec::with_capacity(params.len());
    for (key, value) in params {
        if key == "path" {
            if path.is_none() {
                path = Some(value);
            }
        } else {
            forwarded.push((key, value));
        }
    }
    (path, forwarded)
}

/// Checks the raw path is present and starts with an allowed prefix.
pub fn validate_path(path: Option<String>) -> Result<String, AppError> {
    let path = path.filter(|p| !p.is_empty()).ok_or(AppError::MissingPath)?;

    if !ALLOWED_PATH_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Err(AppError::InvalidPath);
    }
    Ok(path)
}

/// Resolves `<api_base>/<path>` the way the HTTP client will and checks the
/// normalised result is still under an allowed prefix of the same origin.
/// The URL parser folds `\` into `/` and `%2e` into `.`, so traversal hidden
/// in either form only shows up after parsing.
pub fn target_url(api_base: &str, path: &str) -> Result<Url, AppError> {
    let base = Url::parse(api_base)
        .map_err(|e| AppError::Internal(format!("Invalid GitHub API base URL: {e}")))?;
    let url = Url::parse(&format!("{}/{path}", api_base.trim_end_matches('/')))
        .map_err(|_| AppError::InvalidPath)?;

    if url.origin() != base.origin() || url.query().is_some() || url.fragment().is_some() {
        return Err(AppError::InvalidPath);
    }

    let base_path = base.path().trim_end_matches('/');
    let relative = url
        .path()
        .strip_prefix(base_path)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or(AppError::InvalidPath)?;

    if !ALLOWED_PATH_PREFIXES.iter().any(|p| relative.starts_with(p)) {
        return Err(AppError::InvalidPath);
    }
    // Encoded separators or dots left after parsing could still be decoded upstream.
    let lowered = relative.to_ascii_lowercase();
    if ["%2e", "%2f", "%5c"].iter().any(|enc| lowered.contains(enc)) {
        return Err(AppError::InvalidPath);
    }
    Ok(url)
}

/// Issues the authenticated GET to the validated `url` and converts the outcome
/// into the gateway response.
pub async fn forward(
    http: &Client,
    url: Url,
    forwarded: &[(String, String)],
    token: &str,
) -> Result<Response, AppError> {
    let path = url.path().to_string();
    debug!(%path, params = forwarded.len(), "Forwarding GitHub API request");

    let response = http
        .get(url)
        .header("Authorization", format!("token {token}"))
        .header("Accept", GITHUB_ACCEPT)
        .query(forwarded)
        .send()
        .await
        .map_err(|e| {
            error!(%path, "GitHub API proxy error: {e}");
            AppError::Internal(e.to_string())
        })?;

    let status = response.status().as_u16();
    let headers = rate_limit_headers(response.headers());
    let body: Bytes = response.bytes().await.map_err(|e| {
        error!(%path, "Failed to read GitHub API response: {e}");
        AppError::Internal(e.to_string())
    })?;

    if (200..300).contains(&status) {
        let mut relayed =
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response();
        relayed.headers_mut().extend(headers);
        return Ok(relayed);
    }

    let message = upstream_message(&body).unwrap_or_else(|| "GitHub API error".to_string());
    warn!(%path, status, "GitHub API proxy error: {message}");
    Err(AppError::Upstream {
        status,
        message,
        headers,
    })
}

fn upstream_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("message")?.as_str().map(String::from)
}

/// Copies GitHub's `x-ratelimit-*` headers so callers can see quota exhaustion.
fn rate_limit_headers(upstream: &reqwest::header::HeaderMap) -> HeaderMap {
    upstream
        .iter()
        .filter(|(name, _)| name.as_str().starts_with(RATE_LIMIT_HEADER_PREFIX))
        .filter_map(|(name, value)| {
            let name = HeaderName::from_bytes(name.as_str().as_bytes()).ok()?;
            let value = HeaderValue::from_bytes(value.as_bytes()).ok()?;
            Some((name, value))
        })
        .collect()
}
