//! Conversation session manager.
//!
//! This module provides the `ChatService` which owns in-memory session
//! identity, message ordering, optimistic local echo, and resumption and
//! selection logic on top of the remote conversation store.

use crate::session::{ChatSessionHandle, SessionCache};
use aura_core::session::{ConversationMessage, ConversationStoreClient, Session};
use aura_core::Result;
use std::sync::Arc;

/// Assistant message appended when the message exchange with the store
/// fails. The user's own message is preserved regardless.
pub const FALLBACK_ASSISTANT_REPLY: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again in a moment.";

/// The result of resuming a session.
///
/// History loading is best-effort: a failed load yields an empty message
/// list instead of an error, with `degraded` set so the caller can still
/// observe the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumedHistory {
    /// Messages in append order
    pub messages: Vec<ConversationMessage>,
    /// Whether the history load failed and the list is an empty stand-in
    pub degraded: bool,
}

/// Manages conversation sessions and their lifecycle.
///
/// `ChatService` is responsible for:
/// - Starting new sessions against the conversation store
/// - Resuming sessions and caching their history
/// - Exchanging messages with the optimistic-echo ordering guarantee
/// - Listing sessions for navigation
///
/// # Concurrency
///
/// Callers must not issue a second `send_message` for the same session
/// while one is outstanding (single-flight per session); the service does
/// not queue concurrent sends for one session. Sends on different sessions
/// are independent.
pub struct ChatService {
    /// Remote system of record for sessions and messages
    store: Arc<dyn ConversationStoreClient>,
    /// In-memory handles for active sessions
    cache: SessionCache,
}

impl ChatService {
    /// Creates a new `ChatService` on top of a conversation store client.
    pub fn new(store: Arc<dyn ConversationStoreClient>) -> Self {
        Self {
            store,
            cache: SessionCache::new(),
        }
    }

    /// Starts a new session.
    ///
    /// # Returns
    ///
    /// The opaque id of the new session, stable for its lifetime.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamUnavailable` when the store cannot create a
    /// session; this failure is fatal to the user action and surfaced.
    pub async fn start_session(&self) -> Result<String> {
        let session_id = self.store.create_session().await?;
        tracing::info!("[ChatService] Started session {}", session_id);

        self.cache
            .insert(
                session_id.clone(),
                Arc::new(ChatSessionHandle::new(session_id.clone())),
            )
            .await;
        Ok(session_id)
    }

    /// Resumes a session, loading its history at most once.
    ///
    /// The first call fetches the history from the store; later calls are
    /// idempotent and served from the cached handle. A failed fetch
    /// degrades to an empty history and marks the result `degraded`.
    pub async fn resume_session(&self, session_id: &str) -> ResumedHistory {
        if let Some(handle) = self.cache.get(session_id).await {
            return ResumedHistory {
                messages: handle.messages().await,
                degraded: handle.is_history_degraded(),
            };
        }

        match self.store.fetch_history(session_id).await {
            Ok(messages) => {
                let handle = Arc::new(ChatSessionHandle::from_history(
                    session_id,
                    messages.clone(),
                ));
                self.cache.insert(session_id.to_string(), handle).await;
                tracing::debug!(
                    "[ChatService] Resumed session {} with {} messages",
                    session_id,
                    messages.len()
                );
                ResumedHistory {
                    messages,
                    degraded: false,
                }
            }
            Err(e) => {
                tracing::warn!(
                    "[ChatService] Failed to load history for session {}: {}",
                    session_id,
                    e
                );
                let handle = Arc::new(ChatSessionHandle::new(session_id));
                handle.mark_history_degraded();
                self.cache.insert(session_id.to_string(), handle).await;
                ResumedHistory {
                    messages: Vec::new(),
                    degraded: true,
                }
            }
        }
    }

    /// Sends a user message and returns the assistant reply.
    ///
    /// The user message is appended to the local sequence before the
    /// network round trip (optimistic echo), so it is visible before the
    /// reply arrives and is never retracted. When the exchange fails, the
    /// fixed [`FALLBACK_ASSISTANT_REPLY`] is appended instead of an error:
    /// this method never fails.
    pub async fn send_message(&self, session_id: &str, text: &str) -> ConversationMessage {
        let handle = self.cache.get_or_insert_empty(session_id).await;

        handle.push(ConversationMessage::user(text)).await;

        let reply = match self.store.append_and_respond(session_id, text).await {
            Ok(reply_text) => ConversationMessage::assistant(reply_text),
            Err(e) => {
                tracing::warn!(
                    "[ChatService] Message exchange failed for session {}: {}",
                    session_id,
                    e
                );
                ConversationMessage::assistant(FALLBACK_ASSISTANT_REPLY)
            }
        };

        handle.push(reply.clone()).await;
        reply
    }

    /// Lists all sessions, most recent first.
    ///
    /// Used purely for navigation; message order within a session is not
    /// affected. Degrades to an empty list when the store is unavailable.
    pub async fn list_sessions(&self) -> Vec<Session> {
        match self.store.list_sessions().await {
            Ok(mut sessions) => {
                sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
                sessions
            }
            Err(e) => {
                tracing::warn!("[ChatService] Failed to list sessions: {}", e);
                Vec::new()
            }
        }
    }

    /// Returns a read-only snapshot of a session's in-memory messages.
    ///
    /// Empty when the session has not been started or resumed here.
    pub async fn session_messages(&self, session_id: &str) -> Vec<ConversationMessage> {
        match self.cache.get(session_id).await {
            Some(handle) => handle.messages().await,
            None => Vec::new(),
        }
    }
}
