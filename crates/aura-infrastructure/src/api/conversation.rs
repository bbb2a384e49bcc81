//! HTTP conversation store client.

use super::context::ApiContext;
use super::dto::{ChatMessageDto, ChatReplyDto, CreatedSessionDto, SessionSummaryDto};
use async_trait::async_trait;
use aura_core::session::{ConversationMessage, ConversationStoreClient, Session};
use aura_core::{AuraError, Result};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct SendMessageBody<'a> {
    message: &'a str,
}

/// Conversation store client backed by the backend chat API.
pub struct HttpConversationStoreClient {
    ctx: Arc<ApiContext>,
}

impl HttpConversationStoreClient {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ConversationStoreClient for HttpConversationStoreClient {
    async fn create_session(&self) -> Result<String> {
        let response = self
            .ctx
            .post("/api/chat/sessions")
            .await
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to create session: {}", e)))?;

        let created: CreatedSessionDto = self.ctx.expect_json(response, "session", "new").await?;
        tracing::debug!(
            "[ConversationStore] Created session {}",
            created.session_id
        );
        Ok(created.session_id)
    }

    async fn append_and_respond(&self, session_id: &str, user_text: &str) -> Result<String> {
        let response = self
            .ctx
            .post(&format!("/api/chat/sessions/{}/messages", session_id))
            .await
            .json(&SendMessageBody { message: user_text })
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to send message: {}", e)))?;

        let reply: ChatReplyDto = self.ctx.expect_json(response, "session", session_id).await?;
        Ok(reply.into_reply())
    }

    async fn fetch_history(&self, session_id: &str) -> Result<Vec<ConversationMessage>> {
        let response = self
            .ctx
            .get(&format!("/api/chat/sessions/{}/history", session_id))
            .await
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to fetch history: {}", e)))?;

        let messages: Vec<ChatMessageDto> =
            self.ctx.expect_json(response, "session", session_id).await?;
        messages
            .into_iter()
            .map(ConversationMessage::try_from)
            .collect()
    }

    async fn list_sessions(&self) -> Result<Vec<Session>> {
        let response = self
            .ctx
            .get("/api/chat/sessions")
            .await
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to list sessions: {}", e)))?;

        let sessions: Vec<SessionSummaryDto> =
            self.ctx.expect_json(response, "session", "all").await?;
        sessions.into_iter().map(Session::try_from).collect()
    }
}
