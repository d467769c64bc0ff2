use async_trait::async_trait;

use crate::credential::ApiKey;
use crate::problem::Problem;

use super::Result;

/// Repository for per-user problem tracking records.
///
/// A row's identity is the pair `(user_key, title_slug)`. Upserts by that
/// pair overwrite every non-key field unconditionally; there is no
/// partial-field merge and no optimistic concurrency check.
#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Inserts or overwrites the record identified by
    /// `(user_key, problem.title_slug)`.
    ///
    /// Succeeds even when the write changed nothing; no existence check is
    /// performed.
    async fn upsert_problem(&self, user_key: &str, problem: &Problem) -> Result<()>;

    /// Deletes at most one record matching both keys exactly
    /// (case-sensitive). Deleting a non-existent record is not an error.
    async fn delete_problem(&self, user_key: &str, title_slug: &str) -> Result<()>;

    /// Deletes every record belonging to `user_key`. Idempotent; a no-op
    /// on a user with zero records succeeds.
    async fn delete_all_problems(&self, user_key: &str) -> Result<()>;

    /// Lists all records belonging to `user_key`.
    ///
    /// Ordering is whatever the store yields and must not be assumed
    /// sorted. If any returned row fails to decode, the whole call yields
    /// an empty collection.
    async fn list_problems(&self, user_key: &str) -> Result<Vec<Problem>>;
}

/// Repository for issued API-key credentials.
///
/// A row's identity is the pair `(user_key, token)`, with the same upsert
/// semantics as problem records.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Inserts or overwrites the key identified by `(user_key, token)`.
    async fn upsert_api_key(&self, user_key: &str, token: &str, api_key: &ApiKey) -> Result<()>;

    /// Looks up the key for `(user_key, token)`.
    ///
    /// A missing or undecodable row yields the empty-pair sentinel
    /// ([`ApiKey::empty`]), not an error.
    async fn get_api_key(&self, user_key: &str, token: &str) -> Result<ApiKey>;
}
