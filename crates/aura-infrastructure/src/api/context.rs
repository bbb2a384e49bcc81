//! Shared API call context.

use aura_core::secret::AuthTokenProvider;
use aura_core::{AuraError, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide context shared by all HTTP clients.
///
/// Owns the reqwest connection pool, the backend base URL, the per-request
/// timeout bound, and the credential provider whose token is forwarded on
/// every call.
#[derive(Clone)]
pub struct ApiContext {
    client: Client,
    base_url: String,
    timeout: Duration,
    token_provider: Arc<dyn AuthTokenProvider>,
}

impl ApiContext {
    /// Creates a context for the given backend.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Backend base URL, without a trailing slash
    /// * `token_provider` - Credential provider for bearer authentication
    pub fn new(base_url: impl Into<String>, token_provider: Arc<dyn AuthTokenProvider>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            token_provider,
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds an authorized GET request for the given path.
    pub async fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path))).await
    }

    /// Builds an authorized POST request for the given path.
    pub async fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path))).await
    }

    /// Checks the response status and decodes the JSON body.
    ///
    /// # Arguments
    ///
    /// * `response` - The response to decode
    /// * `entity` - Entity name used for `NotFound` classification
    /// * `id` - Entity id used for `NotFound` classification
    pub async fn expect_json<T>(
        &self,
        response: Response,
        entity: &'static str,
        id: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = Self::check_status(response, entity, id).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AuraError::malformed(format!("Failed to parse {} response: {}", entity, e)))
    }

    /// Checks the response status, classifying failures into the error
    /// taxonomy.
    pub async fn check_status(
        response: Response,
        entity: &'static str,
        id: &str,
    ) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AuraError::not_found(entity, id));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AuraError::upstream(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }
        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let mut request = request.timeout(self.timeout);
        if let Some(token) = self.token_provider.bearer_token().await {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::StaticTokenProvider;

    #[tokio::test]
    async fn trailing_slash_is_trimmed_from_base_url() {
        let ctx = ApiContext::new(
            "https://api.example.com/",
            Arc::new(StaticTokenProvider::anonymous()),
        );
        assert_eq!(ctx.url("/api/mood/today"), "https://api.example.com/api/mood/today");
    }
}
