use serde::{Deserialize, Serialize};

/// An issued API key for a user/session token pair.
///
/// The key is opaque to this layer; it is neither generated nor validated
/// here. The composite identity of the stored row is `(user_key, token)`,
/// both passed to the repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// The issued secret.
    pub key: String,
    /// Issuance timestamp. String-encoded, passed through unvalidated.
    pub creation_time: String,
}

impl ApiKey {
    /// Creates an API key record with the given fields.
    pub fn new(key: impl Into<String>, creation_time: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            creation_time: creation_time.into(),
        }
    }

    /// The empty-pair sentinel meaning "no result".
    ///
    /// Lookups return this for a missing or undecodable row; callers cannot
    /// tell the two apart. Part of the repository contract.
    pub fn empty() -> Self {
        Self {
            key: String::new(),
            creation_time: String::new(),
        }
    }

    /// Returns true if this is the empty-pair sentinel.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.creation_time.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        assert!(ApiKey::empty().is_empty());
        assert!(!ApiKey::new("sk-123", "2024-01-01T00:00:00Z").is_empty());
    }

    #[test]
    fn test_partially_filled_key_is_not_empty() {
        let key = ApiKey::new("sk-123", "");
        assert!(!key.is_empty());
    }
}
