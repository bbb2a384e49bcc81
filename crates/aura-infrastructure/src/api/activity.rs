//! HTTP activity source.

use super::context::ApiContext;
use super::dto::ActivityDto;
use async_trait::async_trait;
use aura_core::wellness::{ActivityRecord, ActivitySource, NewActivity};
use aura_core::{AuraError, Result};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogActivityBody<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    name: &'a str,
    description: Option<&'a str>,
    duration: Option<u32>,
}

/// Activity source backed by the backend activity API.
pub struct HttpActivitySource {
    ctx: Arc<ApiContext>,
}

impl HttpActivitySource {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self { ctx }
    }

    async fn fetch_activities(&self, path: &str, id: &str) -> Result<Vec<ActivityRecord>> {
        let response = self
            .ctx
            .get(path)
            .await
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to fetch activities: {}", e)))?;

        let activities: Vec<ActivityDto> = self.ctx.expect_json(response, "activity", id).await?;
        Ok(activities.into_iter().map(ActivityRecord::from).collect())
    }
}

#[async_trait]
impl ActivitySource for HttpActivitySource {
    async fn fetch_today(&self) -> Result<Vec<ActivityRecord>> {
        self.fetch_activities("/api/activity/today", "today").await
    }

    async fn fetch_all(&self, user_id: &str) -> Result<Vec<ActivityRecord>> {
        self.fetch_activities(&format!("/api/activity/user/{}", user_id), user_id)
            .await
    }

    async fn log_activity(&self, activity: NewActivity) -> Result<ActivityRecord> {
        let body = LogActivityBody {
            kind: activity.kind.as_str(),
            name: &activity.name,
            description: activity.description.as_deref(),
            duration: activity.duration_minutes,
        };
        let response = self
            .ctx
            .post("/api/activity")
            .await
            .json(&body)
            .send()
            .await
            .map_err(|e| AuraError::upstream(format!("Failed to log activity: {}", e)))?;

        let stored: ActivityDto = self.ctx.expect_json(response, "activity", "new").await?;
        tracing::debug!("[ActivitySource] Logged activity '{}'", stored.name);
        Ok(stored.into())
    }
}
