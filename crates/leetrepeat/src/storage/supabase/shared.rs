//! Process-wide shared repository.
//!
//! The alternative to injecting a [`SupabaseClient`] per repository: one
//! repository constructed from configuration at startup and shared for the
//! process lifetime. Operations attempted before a successful
//! [`initialize`] fail fast with [`RepositoryError::Uninitialized`] and
//! perform no network call.

use std::sync::OnceLock;

use async_trait::async_trait;

use leetrepeat_core::credential::ApiKey;
use leetrepeat_core::problem::Problem;
use leetrepeat_core::storage::{
    CredentialRepository, ProblemRepository, RepositoryError, Result,
};

use crate::config::Config;

use super::client::SupabaseClient;
use super::repository::SupabaseRepository;

static SHARED: OnceLock<SupabaseRepository> = OnceLock::new();

/// Constructs the shared repository from the given configuration.
///
/// At most one construction succeeds under concurrent first use; other
/// callers observe either the already-built repository or `Uninitialized`,
/// never a half-built one. Calling again after a success is a no-op. A
/// failed construction leaves the shared state unset, so a later call may
/// retry with corrected configuration.
pub fn initialize(config: &Config) -> Result<()> {
    if SHARED.get().is_some() {
        return Ok(());
    }
    let client = SupabaseClient::from_config(config)
        .inspect_err(|e| tracing::error!(error = %e, "failed to initialize shared store client"))?;
    let _ = SHARED.set(SupabaseRepository::new(client, config));
    tracing::debug!("initialized shared store client");
    Ok(())
}

/// Constructs the shared repository from environment configuration.
pub fn initialize_from_env() -> Result<()> {
    let config =
        Config::from_env().map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
    initialize(&config)
}

/// Returns the shared repository, or `Uninitialized` before a successful
/// [`initialize`].
pub fn repository() -> Result<&'static SupabaseRepository> {
    SHARED.get().ok_or(RepositoryError::Uninitialized)
}

/// Handle over the shared repository.
///
/// Resolves the shared instance on every call, so each operation either
/// reaches the store through the one process-wide client or fails fast
/// with `Uninitialized`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedRepository;

#[async_trait]
impl ProblemRepository for SharedRepository {
    async fn upsert_problem(&self, user_key: &str, problem: &Problem) -> Result<()> {
        repository()?.upsert_problem(user_key, problem).await
    }

    async fn delete_problem(&self, user_key: &str, title_slug: &str) -> Result<()> {
        repository()?.delete_problem(user_key, title_slug).await
    }

    async fn delete_all_problems(&self, user_key: &str) -> Result<()> {
        repository()?.delete_all_problems(user_key).await
    }

    async fn list_problems(&self, user_key: &str) -> Result<Vec<Problem>> {
        repository()?.list_problems(user_key).await
    }
}

#[async_trait]
impl CredentialRepository for SharedRepository {
    async fn upsert_api_key(&self, user_key: &str, token: &str, api_key: &ApiKey) -> Result<()> {
        repository()?.upsert_api_key(user_key, token, api_key).await
    }

    async fn get_api_key(&self, user_key: &str, token: &str) -> Result<ApiKey> {
        repository()?.get_api_key(user_key, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The shared slot is process-global state, so the whole uninitialized
    // contract is exercised in one test.
    #[tokio::test]
    async fn test_operations_fail_fast_until_initialized() {
        let repo = SharedRepository;

        let err = repo.list_problems("u1").await.unwrap_err();
        assert_eq!(err, RepositoryError::Uninitialized);

        let err = repo
            .get_api_key("u1", "tok-1")
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::Uninitialized);

        // A failed construction must leave the shared state unset.
        let bad_config = Config::new("not a url", "key");
        assert!(initialize(&bad_config).is_err());

        let err = repo.delete_problem("u1", "two-sum").await.unwrap_err();
        assert_eq!(err, RepositoryError::Uninitialized);
    }
}
