//! Row encode/decode for the Supabase tables.
//!
//! Pure functions for converting between JSON rows and domain types. The
//! row structs carry the exact column names of the remote tables; decoding
//! goes through serde so a missing field or a non-string value is a typed
//! error, never a runtime assertion. Testable in isolation without store
//! access.

use serde::{Deserialize, Serialize};

use leetrepeat_core::credential::ApiKey;
use leetrepeat_core::problem::Problem;
use leetrepeat_core::storage::{RepositoryError, Result};

/// Wire representation of one problems-table row.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRow {
    pub user_key: String,
    pub title_slug: String,
    pub link: String,
    pub repeat_date: String,
    pub last_completion_date: String,
}

/// Wire representation of one credentials-table row.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRow {
    pub user_key: String,
    pub token: String,
    pub api_key: String,
    pub api_key_creation_time: String,
}

/// Builds the row for a user's problem record.
pub fn problem_to_row(user_key: &str, problem: &Problem) -> ProblemRow {
    ProblemRow {
        user_key: user_key.to_string(),
        title_slug: problem.title_slug.clone(),
        link: problem.link.clone(),
        repeat_date: problem.repeat_date.clone(),
        last_completion_date: problem.last_completion_date.clone(),
    }
}

/// Decodes one problems-table row.
///
/// Every expected field must be present and be a string.
pub fn row_to_problem(row: serde_json::Value) -> Result<Problem> {
    let row: ProblemRow =
        serde_json::from_value(row).map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
    Ok(Problem {
        title_slug: row.title_slug,
        link: row.link,
        repeat_date: row.repeat_date,
        last_completion_date: row.last_completion_date,
    })
}

/// Builds the row for an issued API key.
pub fn api_key_to_row(user_key: &str, token: &str, api_key: &ApiKey) -> ApiKeyRow {
    ApiKeyRow {
        user_key: user_key.to_string(),
        token: token.to_string(),
        api_key: api_key.key.clone(),
        api_key_creation_time: api_key.creation_time.clone(),
    }
}

/// Decodes one credentials-table row.
pub fn row_to_api_key(row: serde_json::Value) -> Result<ApiKey> {
    let row: ApiKeyRow =
        serde_json::from_value(row).map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
    Ok(ApiKey {
        key: row.api_key,
        creation_time: row.api_key_creation_time,
    })
}
