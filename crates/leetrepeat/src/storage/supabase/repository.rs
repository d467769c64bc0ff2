//! Supabase repository implementation.
//!
//! Implements the repository traits from `leetrepeat_core::storage` using
//! the Supabase REST interface.

use async_trait::async_trait;

use leetrepeat_core::credential::ApiKey;
use leetrepeat_core::problem::Problem;
use leetrepeat_core::storage::{
    CredentialRepository, ProblemRepository, RepositoryError, Result,
};

use crate::config::Config;

use super::client::SupabaseClient;
use super::conversions::{api_key_to_row, problem_to_row, row_to_api_key, row_to_problem};

/// Conflict key of the problems table.
const PROBLEM_CONFLICT: &[&str] = &["userKey", "titleSlug"];
/// Conflict key of the credentials table.
const API_KEY_CONFLICT: &[&str] = &["userKey", "token"];

/// Supabase-backed repository.
///
/// Stateless over an injected [`SupabaseClient`]; the client owns the
/// connection lifetime, so callers choose between one shared client and a
/// client per repository.
pub struct SupabaseRepository {
    client: SupabaseClient,
    problem_table: String,
    api_key_table: String,
}

impl SupabaseRepository {
    /// Creates a repository over an existing client, with table names taken
    /// from the configuration.
    pub fn new(client: SupabaseClient, config: &Config) -> Self {
        Self {
            client,
            problem_table: config.problem_table.clone(),
            api_key_table: config.api_key_table.clone(),
        }
    }

    /// Creates a repository from environment configuration, constructing a
    /// fresh client.
    pub fn from_env() -> Result<Self> {
        let config =
            Config::from_env().map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        let client = SupabaseClient::from_config(&config)?;
        Ok(Self::new(client, &config))
    }
}

#[async_trait]
impl ProblemRepository for SupabaseRepository {
    async fn upsert_problem(&self, user_key: &str, problem: &Problem) -> Result<()> {
        let row = problem_to_row(user_key, problem);
        self.client
            .upsert(&self.problem_table, &row, PROBLEM_CONFLICT)
            .await
            .inspect_err(|e| tracing::error!(user_key, error = %e, "upsert_problem failed"))?;
        tracing::debug!(user_key, title_slug = %problem.title_slug, "upserted problem record");
        Ok(())
    }

    async fn delete_problem(&self, user_key: &str, title_slug: &str) -> Result<()> {
        self.client
            .delete(
                &self.problem_table,
                &[("userKey", user_key), ("titleSlug", title_slug)],
            )
            .await
            .inspect_err(|e| tracing::error!(user_key, error = %e, "delete_problem failed"))
    }

    async fn delete_all_problems(&self, user_key: &str) -> Result<()> {
        self.client
            .delete(&self.problem_table, &[("userKey", user_key)])
            .await
            .inspect_err(|e| tracing::error!(user_key, error = %e, "delete_all_problems failed"))
    }

    async fn list_problems(&self, user_key: &str) -> Result<Vec<Problem>> {
        let rows = self
            .client
            .select(&self.problem_table, &[("userKey", user_key)])
            .await
            .inspect_err(|e| tracing::error!(user_key, error = %e, "list_problems failed"))?;

        let mut problems = Vec::with_capacity(rows.len());
        for row in rows {
            match row_to_problem(row) {
                Ok(problem) => problems.push(problem),
                // One bad row degrades the whole call to an empty result;
                // callers never see a partial list.
                Err(e) => {
                    tracing::error!(user_key, error = %e, "failed to decode problem row");
                    return Ok(Vec::new());
                }
            }
        }
        Ok(problems)
    }
}

#[async_trait]
impl CredentialRepository for SupabaseRepository {
    async fn upsert_api_key(&self, user_key: &str, token: &str, api_key: &ApiKey) -> Result<()> {
        let row = api_key_to_row(user_key, token, api_key);
        self.client
            .upsert(&self.api_key_table, &row, API_KEY_CONFLICT)
            .await
            .inspect_err(|e| tracing::error!(user_key, error = %e, "upsert_api_key failed"))
    }

    async fn get_api_key(&self, user_key: &str, token: &str) -> Result<ApiKey> {
        let rows = self
            .client
            .select(
                &self.api_key_table,
                &[("userKey", user_key), ("token", token)],
            )
            .await
            .inspect_err(|e| tracing::error!(user_key, error = %e, "get_api_key failed"))?;

        let Some(row) = rows.into_iter().next() else {
            tracing::debug!(user_key, "no api key on record");
            return Ok(ApiKey::empty());
        };

        match row_to_api_key(row) {
            Ok(api_key) => Ok(api_key),
            Err(e) => {
                tracing::error!(user_key, error = %e, "failed to decode api key row");
                Ok(ApiKey::empty())
            }
        }
    }
}
