//! Where the gateway gets its GitHub token. Secrets are read on every request
//! and never cached, so rotating the token needs no restart.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

/// Name of the secret holding the GitHub token.
pub const GITHUB_TOKEN_SECRET: &str = "GITHUB_TOKEN";

#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Returns the secret, or `None` when it is unset or blank.
    async fn get(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment.
pub struct EnvSecretStore;

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn get(&self, name: &str) -> Option<String> {
        non_blank(std::env::var(name).ok()?)
    }
}

/// Reads secrets from one file per secret, e.g. `/run/secrets/GITHUB_TOKEN`.
pub struct FileSecretStore {
    dir: PathBuf,
}

impl FileSecretStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SecretStore for FileSecretStore {
    async fn get(&self, name: &str) -> Option<String> {
        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => non_blank(contents),
            Err(e) => {
                warn!("Failed to read secret {name} from {}: {e}", path.display());
                None
            }
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_trims_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(GITHUB_TOKEN_SECRET), "ghp_secret\n").unwrap();

        let store = FileSecretStore::new(dir.path());
        assert_eq!(
            store.get(GITHUB_TOKEN_SECRET).await.as_deref(),
            Some("ghp_secret")
        );
    }

    #[tokio::test]
    async fn test_file_store_rereads_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecretStore::new(dir.path());
        assert!(store.get(GITHUB_TOKEN_SECRET).await.is_none());

        std::fs::write(dir.path().join(GITHUB_TOKEN_SECRET), "rotated").unwrap();
        assert_eq!(store.get(GITHUB_TOKEN_SECRET).await.as_deref(), Some("rotated"));
    }

    #[tokio::test]
    async fn test_blank_secret_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(GITHUB_TOKEN_SECRET), "  \n").unwrap();
        assert!(FileSecretStore::new(dir.path())
            .get(GITHUB_TOKEN_SECRET)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_env_store_missing_variable() {
        assert!(EnvSecretStore
            .get("PORTFOLIO_API_TEST_SECRET_THAT_IS_NEVER_SET")
            .await
            .is_none());
    }
}
