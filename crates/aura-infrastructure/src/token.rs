//! Bearer credential providers.
//!
//! The auth collaborator owns the credential lifecycle; these providers
//! only hand the current token to the HTTP clients.

use async_trait::async_trait;
use aura_core::secret::AuthTokenProvider;

/// Environment variable the [`EnvTokenProvider`] reads the token from.
pub const TOKEN_ENV_VAR: &str = "AURA_API_TOKEN";

/// Token provider backed by the `AURA_API_TOKEN` environment variable.
///
/// The variable is read on every call so an externally refreshed token is
/// picked up without restarting.
#[derive(Debug, Clone, Default)]
pub struct EnvTokenProvider;

impl EnvTokenProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthTokenProvider for EnvTokenProvider {
    async fn bearer_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty())
    }
}

/// Token provider holding a fixed credential.
///
/// Useful when an embedding application already manages authentication and
/// injects the token at construction.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Creates a provider that always yields the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Creates a provider that yields no token (unauthenticated calls).
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AuthTokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_yields_its_token() {
        let provider = StaticTokenProvider::new("secret-token");
        assert_eq!(provider.bearer_token().await.as_deref(), Some("secret-token"));
    }

    #[tokio::test]
    async fn anonymous_provider_yields_none() {
        let provider = StaticTokenProvider::anonymous();
        assert_eq!(provider.bearer_token().await, None);
    }
}
