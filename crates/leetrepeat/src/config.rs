use std::env;

use thiserror::Error;

const DEFAULT_PROBLEM_TABLE: &str = "problems";
const DEFAULT_API_KEY_TABLE: &str = "api_keys";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Store connection configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Supabase project (e.g. `https://xyz.supabase.co`).
    pub url: String,
    /// Service key, sent as both the `apikey` header and the bearer token.
    pub key: String,
    /// Table holding problem tracking records (default: "problems").
    pub problem_table: String,
    /// Table holding issued API keys (default: "api_keys").
    pub api_key_table: String,
}

impl Config {
    /// Creates a configuration with the default table names.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
            problem_table: DEFAULT_PROBLEM_TABLE.to_string(),
            api_key_table: DEFAULT_API_KEY_TABLE.to_string(),
        }
    }

    /// Sets the table names for this configuration.
    pub fn with_tables(
        mut self,
        problem_table: impl Into<String>,
        api_key_table: impl Into<String>,
    ) -> Self {
        self.problem_table = problem_table.into();
        self.api_key_table = api_key_table.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SUPABASE_URL` - Project endpoint URL (required)
    /// - `SUPABASE_KEY` - Service credential (required)
    /// - `SUPABASE_PROBLEM_TABLE` - Problems table name (default: "problems")
    /// - `SUPABASE_API_KEY_TABLE` - Credentials table name (default: "api_keys")
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("SUPABASE_URL").map_err(|_| ConfigError::MissingVar("SUPABASE_URL"))?,
            key: env::var("SUPABASE_KEY").map_err(|_| ConfigError::MissingVar("SUPABASE_KEY"))?,
            problem_table: env::var("SUPABASE_PROBLEM_TABLE")
                .unwrap_or_else(|_| DEFAULT_PROBLEM_TABLE.to_string()),
            api_key_table: env::var("SUPABASE_API_KEY_TABLE")
                .unwrap_or_else(|_| DEFAULT_API_KEY_TABLE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-wide, so everything touching them
    // lives in one test.
    #[test]
    fn test_from_env() {
        env::set_var("SUPABASE_URL", "https://xyz.supabase.co");
        env::set_var("SUPABASE_KEY", "service-key");
        env::remove_var("SUPABASE_PROBLEM_TABLE");
        env::remove_var("SUPABASE_API_KEY_TABLE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.url, "https://xyz.supabase.co");
        assert_eq!(config.key, "service-key");
        assert_eq!(config.problem_table, "problems");
        assert_eq!(config.api_key_table, "api_keys");

        env::set_var("SUPABASE_PROBLEM_TABLE", "tracked_problems");
        env::set_var("SUPABASE_API_KEY_TABLE", "issued_keys");
        let config = Config::from_env().unwrap();
        assert_eq!(config.problem_table, "tracked_problems");
        assert_eq!(config.api_key_table, "issued_keys");

        env::remove_var("SUPABASE_URL");
        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::MissingVar("SUPABASE_URL")
        );
    }

    #[test]
    fn test_with_tables() {
        let config = Config::new("https://xyz.supabase.co", "key")
            .with_tables("tracked_problems", "issued_keys");
        assert_eq!(config.problem_table, "tracked_problems");
        assert_eq!(config.api_key_table, "issued_keys");
    }
}
