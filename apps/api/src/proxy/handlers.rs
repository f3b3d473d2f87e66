use axum::{
    extract::{Query, State},
    http::Method,
    response::Response,
};
use tracing::error;

use crate::errors::AppError;
use crate::proxy::secrets::GITHUB_TOKEN_SECRET;
use crate::proxy::{forward, split_query, target_url, validate_path};
use crate::state::AppState;

/// ANY /githubProxy?path=<github-api-path>&<params>
///
/// Validation order: method, path present, path allowed (raw and normalised),
/// token configured.
/// Every outcome is a JSON response; nothing escapes as a panic or a bare status.
pub async fn handle_github_proxy(
    State(state): State<AppState>,
    method: Method,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Response, AppError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let params = query.map(|Query(params)| params).unwrap_or_default();
    let (path, forwarded) = split_query(params);
    let path = validate_path(path)?;
    let url = target_url(&state.config.github_api_base, &path)?;

    let token = state
        .secrets
        .get(GITHUB_TOKEN_SECRET)
        .await
        .ok_or_else(|| {
            error!("GitHub token not configured");
            AppError::TokenNotConfigured
        })?;

    forward(&state.http, url, &forwarded, &token).await
}
