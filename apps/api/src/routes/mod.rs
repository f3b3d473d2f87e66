pub mod health;

use axum::{
    http::HeaderValue,
    routing::{any, get},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::profile::handlers as cv;
use crate::projects::handlers as projects;
use crate::proxy::handlers as proxy;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/healthCheck", any(health::health_handler))
        // Gateway: method checking happens in the handler so every verb gets a JSON body
        .route("/githubProxy", any(proxy::handle_github_proxy))
        // Projects API
        .route("/api/v1/projects", get(projects::handle_list_projects))
        .route(
            "/api/v1/projects/rate-limit",
            get(projects::handle_rate_limit),
        )
        // CV API
        .route("/api/v1/cv", get(cv::handle_get_cv))
        .route("/api/v1/cv/profile", get(cv::handle_get_profile))
        .route("/api/v1/cv/experience", get(cv::handle_get_experience))
        .route("/api/v1/cv/education", get(cv::handle_get_education))
        .route(
            "/api/v1/cv/certifications",
            get(cv::handle_get_certifications),
        )
        .route("/api/v1/cv/skills", get(cv::handle_get_skills))
        .route("/api/v1/cv/projects", get(cv::handle_get_projects))
        .with_state(state)
}

/// CORS for the site's origins only, with credentials allowed.
/// Methods and headers are mirrored because wildcards are invalid with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
