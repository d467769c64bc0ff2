//! HTTP client for the Supabase REST (PostgREST) interface.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use url::Url;

use leetrepeat_core::storage::{RepositoryError, Result};

use crate::config::Config;

use super::error::{check_status, map_request_error};

/// Client for a Supabase project's REST interface.
///
/// Holds one authenticated `reqwest::Client`. Cloning is cheap; clones
/// share the underlying connection pool and are safe for concurrent
/// in-flight calls. There is no teardown operation and no timeout at this
/// layer; callers apply their own deadline if they need one.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SupabaseClient {
    /// Creates a client for the given project URL and service key.
    ///
    /// Fails if the endpoint is not a valid URL or the key cannot form a
    /// valid header value.
    pub fn new(base_url: &str, service_key: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            RepositoryError::ConnectionFailed(format!("invalid endpoint {base_url}: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", sensitive_header(service_key)?);
        headers.insert(
            AUTHORIZATION,
            sensitive_header(&format!("Bearer {service_key}"))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Creates a client from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.url, &config.key)
    }

    /// Creates a client from environment configuration.
    pub fn from_env() -> Result<Self> {
        let config =
            Config::from_env().map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Inserts `row`, overwriting any existing row that shares the values
    /// of `conflict_columns`. All non-key columns of an existing row are
    /// replaced; the store does not merge fields.
    pub async fn upsert<T: Serialize>(
        &self,
        table: &str,
        row: &T,
        conflict_columns: &[&str],
    ) -> Result<()> {
        let response = self
            .http
            .post(self.table_url(table))
            .query(&[("on_conflict", conflict_columns.join(",").as_str())])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(row)
            .send()
            .await
            .map_err(map_request_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// Deletes every row matching all `filters` (column equality, combined
    /// by AND). Matching zero rows is a success.
    pub async fn delete(&self, table: &str, filters: &[(&str, &str)]) -> Result<()> {
        let response = self
            .http
            .delete(self.table_url(table))
            .query(&eq_filters(filters))
            .send()
            .await
            .map_err(map_request_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// Selects all rows matching `filters`, returned as raw JSON rows in
    /// store order.
    // TODO: paginate with Range headers once a user can exceed the
    // PostgREST per-request row limit.
    pub async fn select(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<serde_json::Value>> {
        let mut query = eq_filters(filters);
        query.push(("select".to_string(), "*".to_string()));

        let response = self
            .http
            .get(self.table_url(table))
            .query(&query)
            .send()
            .await
            .map_err(map_request_error)?;
        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| RepositoryError::QueryFailed(format!("malformed response body: {e}")))
    }

    /// Builds the REST endpoint URL for a table.
    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.as_str().trim_end_matches('/'),
            table
        )
    }
}

/// Builds a header value that is redacted from debug output.
fn sensitive_header(value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        RepositoryError::ConnectionFailed("service key is not a valid header value".to_string())
    })?;
    header.set_sensitive(true);
    Ok(header)
}

/// Maps column/value pairs to PostgREST equality filter parameters.
fn eq_filters(filters: &[(&str, &str)]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(column, value)| (column.to_string(), format!("eq.{value}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_malformed_endpoint() {
        let err = SupabaseClient::new("not a url", "key").unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_new_rejects_invalid_service_key() {
        let err = SupabaseClient::new("https://xyz.supabase.co", "key\nwith newline").unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_table_url() {
        let client = SupabaseClient::new("https://xyz.supabase.co", "key").unwrap();
        assert_eq!(
            client.table_url("problems"),
            "https://xyz.supabase.co/rest/v1/problems"
        );
    }

    #[test]
    fn test_table_url_with_trailing_slash() {
        let client = SupabaseClient::new("https://xyz.supabase.co/", "key").unwrap();
        assert_eq!(
            client.table_url("problems"),
            "https://xyz.supabase.co/rest/v1/problems"
        );
    }

    #[test]
    fn test_eq_filters() {
        let filters = eq_filters(&[("userKey", "u1"), ("titleSlug", "two-sum")]);
        assert_eq!(
            filters,
            vec![
                ("userKey".to_string(), "eq.u1".to_string()),
                ("titleSlug".to_string(), "eq.two-sum".to_string()),
            ]
        );
    }
}
