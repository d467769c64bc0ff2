use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An operation was attempted before the shared store client was
    /// successfully constructed. Never retried internally.
    #[error("Store client is not initialized")]
    Uninitialized,
    /// Client construction or transport-level failure.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The store rejected the request or returned a malformed response.
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A returned row was missing an expected field or had the wrong shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_display() {
        assert_eq!(
            RepositoryError::Uninitialized.to_string(),
            "Store client is not initialized"
        );
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("store returned 401".to_string());
        assert_eq!(error.to_string(), "Query failed: store returned 401");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("missing field `link`".to_string());
        assert_eq!(error.to_string(), "Invalid data: missing field `link`");
    }
}
