//! Transport error mapping.
//!
//! Maps `reqwest` failures and non-success responses to `RepositoryError`
//! from `leetrepeat_core::storage`.

use leetrepeat_core::storage::{RepositoryError, Result};

/// Map a request-level failure to RepositoryError.
///
/// Failures to reach the store at all are connection failures; everything
/// else (request construction, body encoding) is a query failure.
pub(crate) fn map_request_error(err: reqwest::Error) -> RepositoryError {
    if err.is_connect() || err.is_timeout() {
        RepositoryError::ConnectionFailed(err.to_string())
    } else {
        RepositoryError::QueryFailed(err.to_string())
    }
}

/// Reject non-success responses, capturing the status and body for context.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(RepositoryError::QueryFailed(format!(
        "store returned {status}: {body}"
    )))
}
