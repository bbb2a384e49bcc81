//! Wire DTOs for the backend API.
//!
//! The backend's JSON shapes differ from the domain models (camelCase
//! keys, Mongo-style ids, optional fields); these types decode the wire
//! form and convert into `aura-core` types.

use aura_core::session::{ConversationMessage, MessageRole, Session};
use aura_core::wellness::{ActivityKind, ActivityRecord, MoodSample};
use aura_core::{AuraError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply used when the store answers without any assistant text.
pub const DEFAULT_ASSISTANT_REPLY: &str =
    "I'm here to support you. Could you tell me more about what's on your mind?";

/// One message as the conversation store serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

impl TryFrom<ChatMessageDto> for ConversationMessage {
    type Error = AuraError;

    fn try_from(dto: ChatMessageDto) -> Result<ConversationMessage> {
        let role = match dto.role.as_str() {
            "user" => MessageRole::User,
            "assistant" => MessageRole::Assistant,
            other => {
                return Err(AuraError::malformed(format!(
                    "Unknown message role '{}'",
                    other
                )));
            }
        };
        Ok(ConversationMessage {
            role,
            content: dto.content,
            timestamp: dto.timestamp,
        })
    }
}

/// The store's reply envelope for a message exchange.
///
/// The assistant text arrives under `response` or, in older deployments,
/// `message`; when both are absent a fixed supportive default stands in.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReplyDto {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatReplyDto {
    /// Extracts the assistant reply text.
    pub fn into_reply(self) -> String {
        self.response
            .or(self.message)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ASSISTANT_REPLY.to_string())
    }
}

/// The store's envelope for session creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSessionDto {
    pub session_id: String,
}

/// One session as the store lists it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryDto {
    pub session_id: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessageDto>,
}

impl TryFrom<SessionSummaryDto> for Session {
    type Error = AuraError;

    fn try_from(dto: SessionSummaryDto) -> Result<Session> {
        let start_time = dto.start_time.unwrap_or_default();
        let messages = dto
            .messages
            .into_iter()
            .map(ConversationMessage::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Session {
            id: dto.session_id,
            messages,
            created_at: start_time.clone(),
            updated_at: start_time,
        })
    }
}

/// One mood entry as the mood source serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntryDto {
    pub score: u8,
    pub created_at: DateTime<Utc>,
}

impl From<MoodEntryDto> for MoodSample {
    fn from(dto: MoodEntryDto) -> MoodSample {
        MoodSample {
            score: dto.score,
            captured_at: dto.created_at,
        }
    }
}

/// One activity as the activity source serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub mood_score: Option<u8>,
}

impl From<ActivityDto> for ActivityRecord {
    fn from(dto: ActivityDto) -> ActivityRecord {
        ActivityRecord {
            id: dto.id,
            kind: dto.kind,
            name: dto.name,
            description: dto.description,
            timestamp: dto.timestamp,
            duration_minutes: dto.duration,
            completed: dto.completed,
            mood_score: dto.mood_score,
        }
    }
}
