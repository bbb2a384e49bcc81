//! Session domain model.
//!
//! This module contains the core Session entity that represents one
//! continuous conversational thread in the application's domain layer.

use super::message::ConversationMessage;
use serde::{Deserialize, Serialize};

/// Represents a conversation session in the application's domain layer.
///
/// A session contains:
/// - A stable, opaque identifier assigned by the conversation store
/// - The ordered conversation history (append order is the ordering key)
/// - Timestamps for creation and last update
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format. The conversation store is
/// the system of record; the core never deletes sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (opaque, assigned by the store)
    pub id: String,
    /// Ordered conversation history
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
}

impl Session {
    /// Creates an empty session with the given id, stamped with the
    /// current time.
    pub fn new(id: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: id.into(),
            messages: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
