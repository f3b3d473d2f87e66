use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::github_client::GithubError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders the flat `{error, status?, message?}` body the site expects.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing path parameter")]
    MissingPath,

    #[error("Invalid GitHub API path")]
    InvalidPath,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("GitHub token not configured")]
    TokenNotConfigured,

    /// An error status returned by the GitHub API, relayed with its rate-limit headers.
    #[error("GitHub API error (status {status}): {message}")]
    Upstream {
        status: u16,
        message: String,
        headers: HeaderMap,
    },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Github(#[from] GithubError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            AppError::MissingPath => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing path parameter" })),
            )
                .into_response(),
            AppError::InvalidPath => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid GitHub API path" })),
            )
                .into_response(),
            AppError::InvalidQuery(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::TokenNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "GitHub token not configured",
                    "message": "Please set the GITHUB_TOKEN secret in the proxy configuration"
                })),
            )
                .into_response(),
            AppError::Upstream {
                status,
                message,
                headers,
            } => {
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    code,
                    headers,
                    Json(json!({ "error": message, "status": status })),
                )
                    .into_response()
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error", "message": message })),
                )
                    .into_response()
            }
            AppError::Github(e) => {
                let status = match &e {
                    GithubError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                    GithubError::Configuration => StatusCode::SERVICE_UNAVAILABLE,
                    GithubError::Upstream { .. } | GithubError::Network(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, Json(json!({ "error": e.to_string() }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::HeaderValue;
    use serde_json::Value;

    async fn render(error: AppError) -> (StatusCode, HeaderMap, Value) {
        let response = error.into_response();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let (status, _, body) = render(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_upstream_keeps_status_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        let (status, headers, body) = render(AppError::Upstream {
            status: 403,
            message: "API rate limit exceeded".to_string(),
            headers,
        })
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(headers["x-ratelimit-remaining"], "0");
        assert_eq!(body["error"], "API rate limit exceeded");
        assert_eq!(body["status"], 403);
    }

    #[tokio::test]
    async fn test_invalid_query_is_json() {
        let (status, _, body) =
            render(AppError::InvalidQuery("per_page: invalid digit".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "per_page: invalid digit" }));
    }

    #[tokio::test]
    async fn test_internal_error_carries_message() {
        let (status, _, body) = render(AppError::Internal("connection refused".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "connection refused");
    }

    #[tokio::test]
    async fn test_client_errors_map_to_gateway_statuses() {
        let (status, _, body) = render(AppError::Github(GithubError::Configuration)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].as_str().unwrap().contains("not configured"));

        let (status, _, body) = render(AppError::Github(GithubError::Upstream {
            status: 404,
            message: "Not Found".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body["error"],
            "Failed to fetch GitHub repositories. Please try again later."
        );
    }
}
