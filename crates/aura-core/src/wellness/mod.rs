//! Wellness domain.
//!
//! This module contains the wellness data models, the abstract traits for
//! the mood and activity sources, and the pure derivation functions that
//! turn raw source data into the daily summary, the insight list, and the
//! 28-day activity calendar.

pub mod activity;
pub mod calendar;
pub mod insight;
pub mod mood;
pub mod source;
pub mod summary;

pub use activity::{ActivityKind, ActivityRecord, NewActivity};
pub use calendar::{ActivityLevel, CalendarActivity, CalendarDay, CALENDAR_DAYS, bucketize};
pub use insight::{Insight, InsightPriority, derive_insights};
pub use mood::{MoodSample, NewMoodEntry};
pub use source::{ActivitySource, MoodSource};
pub use summary::{DailySummary, aggregate};
