//! Wellness source traits.
//!
//! Defines the interfaces for the independent mood and activity accessors.
//! Each source has its own timeout and failure domain: one source failing
//! never blocks or invalidates the others.

use super::activity::{ActivityRecord, NewActivity};
use super::mood::{MoodSample, NewMoodEntry};
use crate::error::Result;
use async_trait::async_trait;

/// Accessor for mood data.
#[async_trait]
pub trait MoodSource: Send + Sync {
    /// Fetches all mood samples captured today, in source order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<MoodSample>)`: Zero or more samples; the first element is
    ///   "today's mood" when several exist
    /// - `Err(_)`: The source could not be reached or answered badly
    async fn fetch_today(&self) -> Result<Vec<MoodSample>>;

    /// Records a new mood sample.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The sample was stored
    /// - `Err(_)`: The write failed; surfaced to the caller (a user action)
    async fn save_mood(&self, entry: NewMoodEntry) -> Result<()>;
}

/// Accessor for activity data.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetches the activities whose timestamp falls on the current day.
    async fn fetch_today(&self) -> Result<Vec<ActivityRecord>>;

    /// Fetches the full activity history for a user.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose activities to fetch
    async fn fetch_all(&self, user_id: &str) -> Result<Vec<ActivityRecord>>;

    /// Logs a new activity.
    ///
    /// # Returns
    ///
    /// - `Ok(ActivityRecord)`: The stored record, as echoed by the source
    /// - `Err(_)`: The write failed; surfaced to the caller (a user action)
    async fn log_activity(&self, activity: NewActivity) -> Result<ActivityRecord>;
}
