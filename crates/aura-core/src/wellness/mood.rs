//! Mood domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One mood measurement.
///
/// The mood source may return zero, one, or many samples for "today";
/// zero-or-one-per-day is not guaranteed. When several samples exist,
/// "today's mood" is defined as the first element of the returned
/// sequence (an explicit policy, not a computed aggregate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSample {
    /// Mood score from 0 (lowest) to 100 (highest)
    pub score: u8,
    /// When the sample was captured
    pub captured_at: DateTime<Utc>,
}

/// Payload for recording a new mood sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMoodEntry {
    /// Mood score from 0 (lowest) to 100 (highest)
    pub score: u8,
    /// Optional free-form note
    pub note: Option<String>,
}
