use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::github_client::RepositoryClient;
use crate::profile::ProfileStore;
use crate::proxy::secrets::SecretStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Outbound client the gateway uses for GitHub.
    pub http: Client,
    /// Source of the GitHub token, read on every proxied request.
    pub secrets: Arc<dyn SecretStore>,
    /// Repository client backing the project listing; talks to the gateway.
    pub github: RepositoryClient,
    pub profile: ProfileStore,
}
