//! Conversation store client trait.
//!
//! Defines the interface for the remote conversation store.

use super::message::ConversationMessage;
use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the remote conversation store.
///
/// This trait defines the contract for creating sessions, exchanging
/// messages, and retrieving history, decoupling the application's core
/// logic from the transport (an authenticated HTTP API in production,
/// in-memory fakes in tests).
///
/// # Implementation Notes
///
/// Implementations should:
/// - Attach the bearer credential to every call
/// - Bound each call with a timeout so a stalled upstream cannot block
///   the caller indefinitely
/// - Map transport failures to `AuraError::UpstreamUnavailable`, decoding
///   failures to `AuraError::MalformedResponse`, and missing sessions to
///   `AuraError::NotFound`
#[async_trait]
pub trait ConversationStoreClient: Send + Sync {
    /// Creates a new session.
    ///
    /// # Returns
    ///
    /// - `Ok(session_id)`: The opaque identifier of the new session
    /// - `Err(_)`: The store could not create a session
    async fn create_session(&self) -> Result<String>;

    /// Appends a user message to a session and returns the assistant reply.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The session to append to
    /// * `user_text` - The user's message content
    ///
    /// # Returns
    ///
    /// - `Ok(reply)`: The assistant's reply text
    /// - `Err(_)`: The exchange failed; the caller decides how to degrade
    async fn append_and_respond(&self, session_id: &str, user_text: &str) -> Result<String>;

    /// Fetches the ordered message history of a session.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<ConversationMessage>)`: Messages in append order
    /// - `Err(_)`: History could not be loaded
    async fn fetch_history(&self, session_id: &str) -> Result<Vec<ConversationMessage>>;

    /// Lists all stored sessions.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Session>)`: All stored sessions, order unspecified
    /// - `Err(_)`: The listing could not be retrieved
    async fn list_sessions(&self) -> Result<Vec<Session>>;
}
