//! HTTP mood source.

use super::context::ApiContext;
use super::dto::MoodEntryDto;
use async_trait::async_trait;
use aura_core::wellness::{MoodSample, MoodSource, NewMoodEntry};
use aura_core::{AuraError, Result};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct SaveMoodBody<'a> {
    score: u8,
    note: Option<&'a str>,
}

/// Mood source backed by the backend mood API.
pub struct HttpMoodSource {
    ctx: Arc<ApiContext>,
}

impl HttpMoodSource {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl MoodSource for HttpMoodSource {
    async fn fetch_today(&self) -> Result<Vec<MoodSample>> {
        let response = self
            .ctx
            .get("/api/mood/today")
            .await
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to fetch today's mood: {}", e)))?;

        let entries: Vec<MoodEntryDto> = self.ctx.expect_json(response, "mood", "today").await?;
        Ok(entries.into_iter().map(MoodSample::from).collect())
    }

    async fn save_mood(&self, entry: NewMoodEntry) -> Result<()> {
        let body = SaveMoodBody {
            score: entry.score,
            note: entry.note.as_deref(),
        };
        let response = self
            .ctx
            .post("/api/mood")
            .await
            .json(&body)
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to save mood: {}", e)))?;

        ApiContext::check_status(response, "mood", "new").await?;
        tracing::debug!("[MoodSource] Saved mood sample (score {})", entry.score);
        Ok(())
    }
}
