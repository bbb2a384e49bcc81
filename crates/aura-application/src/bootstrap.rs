//! Application composition root.
//!
//! Wires the HTTP infrastructure into the application services from one
//! configuration value, and owns the start/stop lifecycle of the periodic
//! wellness refresh.

use crate::chat_service::ChatService;
use crate::wellness_service::WellnessService;
use aura_core::secret::AuthTokenProvider;
use aura_core::session::ConversationStoreClient;
use aura_infrastructure::api::ApiContext;
use aura_infrastructure::{AppConfig, HttpActivitySource, HttpConversationStoreClient, HttpMoodSource};
use std::sync::Arc;
use std::time::Duration;

/// The assembled application: both services wired to one backend.
///
/// The bearer credential provider comes from the embedding application's
/// auth collaborator; everything else is derived from [`AppConfig`].
pub struct AuraRuntime {
    chat: Arc<ChatService>,
    wellness: Arc<WellnessService>,
    refresh_interval_secs: u64,
}

impl AuraRuntime {
    /// Builds the services for the configured backend.
    pub fn from_config(config: &AppConfig, token_provider: Arc<dyn AuthTokenProvider>) -> Self {
        let ctx = Arc::new(
            ApiContext::new(&config.api.base_url, token_provider)
                .with_timeout(Duration::from_secs(config.api.timeout_secs)),
        );

        let store: Arc<dyn ConversationStoreClient> =
            Arc::new(HttpConversationStoreClient::new(ctx.clone()));
        let mood_source = Arc::new(HttpMoodSource::new(ctx.clone()));
        let activity_source = Arc::new(HttpActivitySource::new(ctx));

        let chat = Arc::new(ChatService::new(store.clone()));
        let wellness = Arc::new(WellnessService::new(
            mood_source,
            activity_source,
            store,
            config.user_id.clone(),
        ));

        tracing::info!(
            "[AuraRuntime] Wired services for backend {}",
            config.api.base_url
        );

        Self {
            chat,
            wellness,
            refresh_interval_secs: config.refresh.interval_secs,
        }
    }

    /// Returns the conversation session manager.
    pub fn chat(&self) -> &Arc<ChatService> {
        &self.chat
    }

    /// Returns the wellness dashboard service.
    pub fn wellness(&self) -> &Arc<WellnessService> {
        &self.wellness
    }

    /// Starts the periodic wellness refresh.
    pub async fn start(&self) {
        self.wellness
            .start_scheduler(self.refresh_interval_secs)
            .await;
    }

    /// Stops the periodic wellness refresh.
    pub async fn shutdown(&self) {
        self.wellness.stop_scheduler().await;
    }
}
