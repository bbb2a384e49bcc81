//! Auth credential provider trait.
//!
//! Defines the interface through which HTTP clients obtain the bearer
//! credential for remote calls. The credential's lifecycle (login, refresh,
//! expiry) belongs to an external auth collaborator; this layer only
//! forwards whatever token that collaborator currently holds.

use async_trait::async_trait;

/// Provider of the bearer credential attached to outgoing API requests.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Tokens are never logged or exposed in error messages
/// - Tokens are loaded from secure locations
#[async_trait]
pub trait AuthTokenProvider: Send + Sync {
    /// Returns the current bearer token, if one is available.
    ///
    /// `None` means the request goes out unauthenticated; the remote side
    /// decides whether that is acceptable.
    async fn bearer_token(&self) -> Option<String>;
}
