//! Wellness dashboard refresh service.
//!
//! This module provides the `WellnessService` which fetches the
//! independent wellness sources, derives the daily summary, the insight
//! list, and the activity calendar, and publishes them as one atomically
//! replaced snapshot. A periodic scheduler with an explicit start/stop
//! lifecycle drives recomputation.

use aura_core::Result;
use aura_core::session::ConversationStoreClient;
use aura_core::wellness::{
    ActivityRecord, ActivitySource, CalendarDay, DailySummary, Insight, MoodSample, MoodSource,
    NewActivity, NewMoodEntry, aggregate, bucketize, derive_insights,
};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::interval;

/// One complete, derived view of the wellness dashboard.
///
/// Recomputed as a whole on every refresh and replaced atomically; callers
/// receive read-only clones and must not rely on cross-refresh identity.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashboardSnapshot {
    pub summary: DailySummary,
    pub insights: Vec<Insight>,
    pub calendar: Vec<CalendarDay>,
}

/// Coordinates the wellness sources into the dashboard snapshot.
///
/// Each source has its own failure domain: a failing source degrades only
/// its own fields (mood to `None`, activities to empty, session count to
/// zero) and never aborts the refresh. Overlapping refreshes are resolved
/// last-write-wins by completion order.
pub struct WellnessService {
    /// Source for mood samples
    mood_source: Arc<dyn MoodSource>,
    /// Source for logged activities
    activity_source: Arc<dyn ActivitySource>,
    /// Conversation store; its session listing is the session-count source
    store: Arc<dyn ConversationStoreClient>,
    /// User identifier forwarded to the activity source
    user_id: String,
    /// Latest published snapshot
    snapshot: Arc<RwLock<Option<DashboardSnapshot>>>,
    /// Handle of the running periodic refresh task, if any
    scheduler: Mutex<Option<JoinHandle<()>>>,
}

impl WellnessService {
    /// Creates a new `WellnessService`.
    ///
    /// # Arguments
    ///
    /// * `mood_source` - Accessor for mood data
    /// * `activity_source` - Accessor for activity data
    /// * `store` - Conversation store used for the session count
    /// * `user_id` - User whose activity history feeds the calendar
    pub fn new(
        mood_source: Arc<dyn MoodSource>,
        activity_source: Arc<dyn ActivitySource>,
        store: Arc<dyn ConversationStoreClient>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            mood_source,
            activity_source,
            store,
            user_id: user_id.into(),
            snapshot: Arc::new(RwLock::new(None)),
            scheduler: Mutex::new(None),
        }
    }

    /// Recomputes the dashboard from the sources and publishes it.
    ///
    /// Total: never fails. The sources are queried concurrently and each
    /// failure degrades only its own inputs, with a warn diagnostic. The
    /// new snapshot replaces the old one in a single write.
    pub async fn refresh(&self) -> DashboardSnapshot {
        tracing::debug!("[WellnessService] Refreshing dashboard");

        let (mood, todays, all, sessions) = tokio::join!(
            self.mood_source.fetch_today(),
            self.activity_source.fetch_today(),
            self.activity_source.fetch_all(&self.user_id),
            self.store.list_sessions(),
        );

        let mood_sample: Option<MoodSample> = match mood {
            Ok(samples) => samples.into_iter().next(),
            Err(e) => {
                tracing::warn!("[WellnessService] Mood fetch failed: {}", e);
                None
            }
        };
        let todays_activities: Vec<ActivityRecord> = match todays {
            Ok(activities) => activities,
            Err(e) => {
                tracing::warn!("[WellnessService] Today's activity fetch failed: {}", e);
                Vec::new()
            }
        };
        let all_activities: Vec<ActivityRecord> = match all {
            Ok(activities) => activities,
            Err(e) => {
                tracing::warn!("[WellnessService] Activity history fetch failed: {}", e);
                Vec::new()
            }
        };
        let session_count = match sessions {
            Ok(sessions) => sessions.len(),
            Err(e) => {
                tracing::warn!("[WellnessService] Session listing failed: {}", e);
                0
            }
        };

        let now = Local::now();
        let summary = aggregate(
            &todays_activities,
            mood_sample.as_ref(),
            session_count,
            &now,
        );
        let insights = derive_insights(&all_activities, &summary);
        let calendar = bucketize(&all_activities, &now);

        let snapshot = DashboardSnapshot {
            summary,
            insights,
            calendar,
        };

        *self.snapshot.write().await = Some(snapshot.clone());
        tracing::debug!(
            "[WellnessService] Published snapshot ({} activities today, {} sessions)",
            snapshot.summary.activity_count,
            snapshot.summary.session_count
        );
        snapshot
    }

    /// Returns the latest published snapshot, if a refresh has completed.
    pub async fn snapshot(&self) -> Option<DashboardSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Starts the periodic refresh scheduler.
    ///
    /// The first refresh runs immediately, then every `interval_secs`
    /// seconds. Starting an already-running scheduler logs a warning and
    /// keeps the existing one.
    pub async fn start_scheduler(self: &Arc<Self>, interval_secs: u64) {
        let mut guard = self.scheduler.lock().await;
        if guard.is_some() {
            tracing::warn!("[WellnessService] Refresh scheduler already running, skipping");
            return;
        }

        let service = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(interval_secs));
            tracing::info!(
                target: "wellness_refresh",
                "Scheduler started ({}s interval)",
                interval_secs
            );

            loop {
                ticker.tick().await;
                service.refresh().await;
            }
        });

        *guard = Some(handle);
    }

    /// Stops the periodic refresh scheduler.
    ///
    /// A refresh already in flight may still complete and publish; that
    /// final publication is the accepted last-write-wins outcome.
    pub async fn stop_scheduler(&self) {
        if let Some(handle) = self.scheduler.lock().await.take() {
            handle.abort();
            tracing::info!(target: "wellness_refresh", "Scheduler stopped");
        }
    }

    /// Records a mood sample, then refreshes the dashboard.
    ///
    /// # Errors
    ///
    /// Write failures are surfaced to the caller; the dashboard is only
    /// refreshed after a successful write.
    pub async fn record_mood(&self, entry: NewMoodEntry) -> Result<()> {
        self.mood_source.save_mood(entry).await?;
        self.refresh().await;
        Ok(())
    }

    /// Logs an activity, then refreshes the dashboard.
    ///
    /// # Errors
    ///
    /// Write failures are surfaced to the caller; the dashboard is only
    /// refreshed after a successful write.
    pub async fn log_activity(&self, activity: NewActivity) -> Result<ActivityRecord> {
        let stored = self.activity_source.log_activity(activity).await?;
        self.refresh().await;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use aura_core::AuraError;
    use aura_core::session::{ConversationMessage, Session};
    use aura_core::wellness::{ActivityKind, ActivityLevel, CALENDAR_DAYS};
    use chrono::Utc;
    use std::sync::Mutex as StdMutex;

    // Mock MoodSource for testing
    struct MockMoodSource {
        samples: StdMutex<Vec<MoodSample>>,
        fail_fetch: bool,
        fail_save: bool,
    }

    impl MockMoodSource {
        fn new(samples: Vec<MoodSample>) -> Self {
            Self {
                samples: StdMutex::new(samples),
                fail_fetch: false,
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                samples: StdMutex::new(Vec::new()),
                fail_fetch: true,
                fail_save: true,
            }
        }
    }

    #[async_trait]
    impl MoodSource for MockMoodSource {
        async fn fetch_today(&self) -> Result<Vec<MoodSample>> {
            if self.fail_fetch {
                return Err(AuraError::upstream("mood source down"));
            }
            Ok(self.samples.lock().unwrap().clone())
        }

        async fn save_mood(&self, entry: NewMoodEntry) -> Result<()> {
            if self.fail_save {
                return Err(AuraError::upstream("mood source down"));
            }
            self.samples.lock().unwrap().push(MoodSample {
                score: entry.score,
                captured_at: Utc::now(),
            });
            Ok(())
        }
    }

    // Mock ActivitySource for testing
    struct MockActivitySource {
        activities: StdMutex<Vec<ActivityRecord>>,
        fail_fetch: bool,
    }

    impl MockActivitySource {
        fn new(activities: Vec<ActivityRecord>) -> Self {
            Self {
                activities: StdMutex::new(activities),
                fail_fetch: false,
            }
        }

        fn failing() -> Self {
            Self {
                activities: StdMutex::new(Vec::new()),
                fail_fetch: true,
            }
        }
    }

    #[async_trait]
    impl ActivitySource for MockActivitySource {
        async fn fetch_today(&self) -> Result<Vec<ActivityRecord>> {
            if self.fail_fetch {
                return Err(AuraError::upstream("activity source down"));
            }
            let today = Local::now().date_naive();
            Ok(self
                .activities
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.timestamp.with_timezone(&Local).date_naive() == today)
                .cloned()
                .collect())
        }

        async fn fetch_all(&self, _user_id: &str) -> Result<Vec<ActivityRecord>> {
            if self.fail_fetch {
                return Err(AuraError::upstream("activity source down"));
            }
            Ok(self.activities.lock().unwrap().clone())
        }

        async fn log_activity(&self, activity: NewActivity) -> Result<ActivityRecord> {
            let record = ActivityRecord {
                id: uuid::Uuid::new_v4().to_string(),
                kind: activity.kind,
                name: activity.name,
                description: activity.description,
                timestamp: Utc::now(),
                duration_minutes: activity.duration_minutes,
                completed: false,
                mood_score: None,
            };
            self.activities.lock().unwrap().push(record.clone());
            Ok(record)
        }
    }

    // Mock ConversationStoreClient providing only the session listing
    struct MockSessionListing {
        count: usize,
        fail: bool,
    }

    #[async_trait]
    impl ConversationStoreClient for MockSessionListing {
        async fn create_session(&self) -> Result<String> {
            Err(AuraError::internal("not used in these tests"))
        }

        async fn append_and_respond(&self, _: &str, _: &str) -> Result<String> {
            Err(AuraError::internal("not used in these tests"))
        }

        async fn fetch_history(&self, _: &str) -> Result<Vec<ConversationMessage>> {
            Err(AuraError::internal("not used in these tests"))
        }

        async fn list_sessions(&self) -> Result<Vec<Session>> {
            if self.fail {
                return Err(AuraError::upstream("store down"));
            }
            Ok((0..self.count)
                .map(|i| Session::new(format!("s-{}", i)))
                .collect())
        }
    }

    fn service(
        mood: MockMoodSource,
        activities: MockActivitySource,
        sessions: MockSessionListing,
    ) -> Arc<WellnessService> {
        Arc::new(WellnessService::new(
            Arc::new(mood),
            Arc::new(activities),
            Arc::new(sessions),
            "default-user",
        ))
    }

    fn activity_now(name: &str) -> ActivityRecord {
        ActivityRecord {
            id: uuid::Uuid::new_v4().to_string(),
            kind: ActivityKind::Game,
            name: name.to_string(),
            description: None,
            timestamp: Utc::now(),
            duration_minutes: Some(5),
            completed: false,
            mood_score: None,
        }
    }

    #[tokio::test]
    async fn test_refresh_with_empty_sources_yields_welcome_state() {
        let service = service(
            MockMoodSource::new(Vec::new()),
            MockActivitySource::new(Vec::new()),
            MockSessionListing {
                count: 0,
                fail: false,
            },
        );

        let snapshot = service.refresh().await;

        assert_eq!(snapshot.summary.mood_score, None);
        assert_eq!(snapshot.summary.completion_rate, 0);
        assert_eq!(snapshot.summary.activity_count, 0);
        assert_eq!(snapshot.summary.session_count, 0);
        let titles: Vec<&str> = snapshot.insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Welcome to Your Wellness Journey",
                "Track Your First Mood",
                "Start with Activities",
            ]
        );
        assert_eq!(snapshot.calendar.len(), CALENDAR_DAYS);
    }

    #[tokio::test]
    async fn test_refresh_merges_all_sources() {
        let now = Utc::now();
        let service = service(
            MockMoodSource::new(vec![
                MoodSample {
                    score: 30,
                    captured_at: now,
                },
                MoodSample {
                    score: 90,
                    captured_at: now,
                },
            ]),
            MockActivitySource::new(vec![activity_now("Breathing")]),
            MockSessionListing {
                count: 2,
                fail: false,
            },
        );

        let snapshot = service.refresh().await;

        // First sample wins when several exist for the day.
        assert_eq!(snapshot.summary.mood_score, Some(30));
        assert_eq!(snapshot.summary.completion_rate, 100);
        assert_eq!(snapshot.summary.activity_count, 1);
        assert_eq!(snapshot.summary.session_count, 2);

        let titles: Vec<&str> = snapshot.insights.iter().map(|i| i.title.as_str()).collect();
        assert!(titles.contains(&"Mood Support Available"));
        assert!(titles.contains(&"Therapy Progress"));

        assert_eq!(
            snapshot.calendar.last().unwrap().level,
            ActivityLevel::Low
        );
    }

    #[tokio::test]
    async fn test_source_failures_degrade_independently() {
        let service = service(
            MockMoodSource::failing(),
            MockActivitySource::new(vec![activity_now("Zen Garden")]),
            MockSessionListing {
                count: 3,
                fail: false,
            },
        );

        let snapshot = service.refresh().await;

        assert_eq!(snapshot.summary.mood_score, None);
        assert_eq!(snapshot.summary.activity_count, 1);
        assert_eq!(snapshot.summary.session_count, 3);
    }

    #[tokio::test]
    async fn test_refresh_is_total_when_every_source_fails() {
        let service = service(
            MockMoodSource::failing(),
            MockActivitySource::failing(),
            MockSessionListing {
                count: 0,
                fail: true,
            },
        );

        let snapshot = service.refresh().await;

        assert_eq!(snapshot.summary.mood_score, None);
        assert_eq!(snapshot.summary.activity_count, 0);
        assert_eq!(snapshot.summary.session_count, 0);
        assert_eq!(snapshot.calendar.len(), CALENDAR_DAYS);
        assert!(!snapshot.insights.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_replaced_as_a_whole() {
        let service = service(
            MockMoodSource::new(Vec::new()),
            MockActivitySource::new(Vec::new()),
            MockSessionListing {
                count: 0,
                fail: false,
            },
        );

        assert!(service.snapshot().await.is_none());

        let first = service.refresh().await;
        assert_eq!(service.snapshot().await, Some(first));

        let second = service.refresh().await;
        assert_eq!(service.snapshot().await, Some(second));
    }

    #[tokio::test]
    async fn test_log_activity_updates_the_snapshot() {
        let service = service(
            MockMoodSource::new(Vec::new()),
            MockActivitySource::new(Vec::new()),
            MockSessionListing {
                count: 0,
                fail: false,
            },
        );

        let stored = service
            .log_activity(NewActivity {
                kind: ActivityKind::Game,
                name: "Ocean Waves".to_string(),
                description: None,
                duration_minutes: Some(3),
            })
            .await
            .unwrap();

        assert_eq!(stored.name, "Ocean Waves");
        let snapshot = service.snapshot().await.unwrap();
        assert_eq!(snapshot.summary.activity_count, 1);
        assert_eq!(snapshot.summary.completion_rate, 100);
    }

    #[tokio::test]
    async fn test_record_mood_failure_is_surfaced_without_refresh() {
        let service = service(
            MockMoodSource::failing(),
            MockActivitySource::new(Vec::new()),
            MockSessionListing {
                count: 0,
                fail: false,
            },
        );

        let err = service
            .record_mood(NewMoodEntry {
                score: 40,
                note: None,
            })
            .await
            .unwrap_err();

        assert!(err.is_upstream_unavailable());
        assert!(service.snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_scheduler_start_stop_lifecycle() {
        let service = service(
            MockMoodSource::new(Vec::new()),
            MockActivitySource::new(Vec::new()),
            MockSessionListing {
                count: 0,
                fail: false,
            },
        );

        service.start_scheduler(3600).await;
        // Second start is a no-op on the running scheduler.
        service.start_scheduler(3600).await;

        // The first tick fires immediately; wait for it to publish.
        let mut published = false;
        for _ in 0..50 {
            if service.snapshot().await.is_some() {
                published = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(published);

        service.stop_scheduler().await;
        assert!(service.scheduler.lock().await.is_none());
    }
}
