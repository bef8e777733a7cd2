//! Hosted store REST client
//!
//! Thin wrapper over the store's PostgREST surface. Every request is
//! stateless and carries the service key; there is no session to persist or
//! refresh.

use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

use crate::infrastructure::ports::RepoError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the store's `/rest/v1` API
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    timeout_secs,
                    "Could not build HTTP client with timeout, falling back to defaults"
                );
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Start an authenticated request against `table`.
    pub fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Send a request, turning transport failures and non-2xx answers into
    /// `RepoError::Database` tagged with `operation`.
    pub async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, RepoError> {
        let response = request
            .send()
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RepoError::database(
                operation,
                format!("HTTP {}: {}", status.as_u16(), error_text),
            ));
        }

        Ok(response)
    }

    /// Decode a JSON body, reporting failures as `RepoError::Serialization`.
    pub async fn decode<T: serde::de::DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> Result<T, RepoError> {
        response
            .json()
            .await
            .map_err(|e| RepoError::serialization(format!("{}: {}", operation, e)))
    }
}
