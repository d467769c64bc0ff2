//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use leetrepeat_core::credential::ApiKey;
use leetrepeat_core::problem::Problem;
use leetrepeat_core::storage::{CredentialRepository, ProblemRepository, Result};

/// In-memory storage backend for testing.
///
/// Uses HashMaps keyed by the composite row identity, wrapped in
/// `Arc<RwLock<_>>` for thread-safe access. Data is not persisted and is
/// lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    problems: Arc<RwLock<HashMap<(String, String), Problem>>>,
    api_keys: Arc<RwLock<HashMap<(String, String), ApiKey>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProblemRepository for InMemoryRepository {
    async fn upsert_problem(&self, user_key: &str, problem: &Problem) -> Result<()> {
        let mut problems = self.problems.write().await;
        problems.insert(
            (user_key.to_string(), problem.title_slug.clone()),
            problem.clone(),
        );
        Ok(())
    }

    async fn delete_problem(&self, user_key: &str, title_slug: &str) -> Result<()> {
        let mut problems = self.problems.write().await;
        problems.remove(&(user_key.to_string(), title_slug.to_string()));
        Ok(())
    }

    async fn delete_all_problems(&self, user_key: &str) -> Result<()> {
        let mut problems = self.problems.write().await;
        problems.retain(|(owner, _), _| owner != user_key);
        Ok(())
    }

    async fn list_problems(&self, user_key: &str) -> Result<Vec<Problem>> {
        let problems = self.problems.read().await;
        Ok(problems
            .iter()
            .filter(|((owner, _), _)| owner == user_key)
            .map(|(_, problem)| problem.clone())
            .collect())
    }
}

#[async_trait]
impl CredentialRepository for InMemoryRepository {
    async fn upsert_api_key(&self, user_key: &str, token: &str, api_key: &ApiKey) -> Result<()> {
        let mut api_keys = self.api_keys.write().await;
        api_keys.insert(
            (user_key.to_string(), token.to_string()),
            api_key.clone(),
        );
        Ok(())
    }

    async fn get_api_key(&self, user_key: &str, token: &str) -> Result<ApiKey> {
        let api_keys = self.api_keys.read().await;
        Ok(api_keys
            .get(&(user_key.to_string(), token.to_string()))
            .cloned()
            .unwrap_or_else(ApiKey::empty))
    }
}
