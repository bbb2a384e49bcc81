//! In-memory state of one active conversation session.

use aura_core::session::ConversationMessage;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// The live, in-memory state of one conversation session.
///
/// Owns the ordered message sequence while the session is active; the
/// conversation store remains the system of record. Messages are only
/// appended, never retracted, and only by the owning `ChatService`'s
/// sequential calls for this session.
pub struct ChatSessionHandle {
    session_id: String,
    messages: RwLock<Vec<ConversationMessage>>,
    /// Set when the initial history load failed and the session started
    /// from an empty history.
    history_degraded: AtomicBool,
}

impl ChatSessionHandle {
    /// Creates a handle with an empty history.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: RwLock::new(Vec::new()),
            history_degraded: AtomicBool::new(false),
        }
    }

    /// Creates a handle seeded with a fetched history.
    pub fn from_history(session_id: impl Into<String>, messages: Vec<ConversationMessage>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: RwLock::new(messages),
            history_degraded: AtomicBool::new(false),
        }
    }

    /// Returns the session identifier.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns a read-only snapshot of the ordered message sequence.
    pub async fn messages(&self) -> Vec<ConversationMessage> {
        self.messages.read().await.clone()
    }

    /// Appends a message to the end of the sequence.
    pub async fn push(&self, message: ConversationMessage) {
        self.messages.write().await.push(message);
    }

    /// Marks the handle as started from a failed history load.
    pub fn mark_history_degraded(&self) {
        self.history_degraded.store(true, Ordering::SeqCst);
    }

    /// Whether the initial history load failed.
    pub fn is_history_degraded(&self) -> bool {
        self.history_degraded.load(Ordering::SeqCst)
    }
}
