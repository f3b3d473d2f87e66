//! Axum route handlers for the project listing.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::repository::{EnrichedRepository, FetchOptions};
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Enriched public repositories, newest commit first. Query parameters
/// override the listing defaults (`per_page`, `sort`, `direction`, `type`).
pub async fn handle_list_projects(
    State(state): State<AppState>,
    query: Result<Query<FetchOptions>, QueryRejection>,
) -> Result<Json<Vec<EnrichedRepository>>, AppError> {
    let Query(options) = query.map_err(|e| AppError::InvalidQuery(e.body_text()))?;
    let repos = state.github.fetch_repositories(&options).await?;
    Ok(Json(repos))
}

/// GET /api/v1/projects/rate-limit
///
/// `null` when the rate-limit document is unavailable.
pub async fn handle_rate_limit(State(state): State<AppState>) -> Json<Option<Value>> {
    Json(state.github.rate_limit().await)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::test_support::{body_json, spawn, test_state};

    async fn repos() -> impl IntoResponse {
        Json(json!([
            {
                "id": 1, "name": "old-api", "description": null,
                "private": false, "fork": false, "language": "Go", "topics": [],
                "pushed_at": "2023-01-01T00:00:00Z", "updated_at": "2023-01-01T00:00:00Z",
                "owner": { "login": "octo" }
            },
            {
                "id": 2, "name": "docker-lab", "description": "containers",
                "private": false, "fork": false, "language": "Shell", "topics": ["docker"],
                "pushed_at": "2024-06-01T00:00:00Z", "updated_at": "2024-06-01T00:00:00Z",
                "owner": { "login": "octo" }
            },
            {
                "id": 3, "name": "forked", "description": null,
                "private": false, "fork": true, "language": "Rust", "topics": [],
                "pushed_at": "2025-01-01T00:00:00Z", "updated_at": "2025-01-01T00:00:00Z",
                "owner": { "login": "octo" }
            }
        ]))
    }

    async fn empty_commits() -> impl IntoResponse {
        Json(json!([]))
    }

    async fn limited() -> impl IntoResponse {
        (
            StatusCode::FORBIDDEN,
            [("x-ratelimit-remaining", "0"), ("x-ratelimit-reset", "1700000000")],
            Json(json!({ "message": "API rate limit exceeded" })),
        )
    }

    /// Client → real gateway → fake GitHub, all over HTTP.
    async fn full_chain(github: Router) -> Router {
        let github_url = spawn(github).await;
        let gateway = spawn(build_router(test_state(&github_url, "", Some("ghp_test")))).await;
        build_router(test_state(
            &github_url,
            &format!("{gateway}/githubProxy"),
            Some("ghp_test"),
        ))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    #[tokio::test]
    async fn test_projects_through_the_gateway() {
        let app = full_chain(
            Router::new()
                .route("/users/octo/repos", get(repos))
                .route("/repos/octo/old-api/commits", get(empty_commits))
                .route("/repos/octo/docker-lab/commits", get(empty_commits)),
        )
        .await;

        let (status, body) = get_json(app, "/api/v1/projects?per_page=5").await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["docker-lab", "old-api"]);
        assert_eq!(body[0]["type"], "Other");
        assert_eq!(body[0]["techStack"], json!(["Shell", "Docker"]));
        assert_eq!(body[0]["last_commit_date"], "2024-06-01T00:00:00Z");
        assert_eq!(body[1]["type"], "Backend");
    }

    #[tokio::test]
    async fn test_malformed_options_are_a_json_400() {
        let app = full_chain(Router::new()).await;
        let (status, body) = get_json(app, "/api/v1/projects?per_page=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to deserialize query string"));
    }

    #[tokio::test]
    async fn test_rate_limit_through_the_gateway_is_429() {
        let app = full_chain(Router::new().route("/users/octo/repos", get(limited))).await;

        let (status, body) = get_json(app, "/api/v1/projects").await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("rate limit exceeded"));
        assert!(message.contains("22:13:20 UTC"));
    }

    #[tokio::test]
    async fn test_rate_limit_document_is_refused_by_the_allow_list() {
        let app = full_chain(Router::new()).await;
        let (status, body) = get_json(app, "/api/v1/projects/rate-limit").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }
}
