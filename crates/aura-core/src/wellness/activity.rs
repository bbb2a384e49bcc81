//! Activity domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The category of a logged activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A calming game (breathing exercise, zen garden, etc.)
    Game,
    /// A therapy conversation session
    Therapy,
    /// A mood check-in
    Mood,
    /// Any category this version does not know about
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Returns the lowercase wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Therapy => "therapy",
            Self::Mood => "mood",
            Self::Other => "other",
        }
    }
}

/// A single activity logged by the user.
///
/// Supplied by the activity source; read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique identifier assigned by the source
    pub id: String,
    /// Category of the activity
    pub kind: ActivityKind,
    /// Display name of the activity
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// When the activity took place
    pub timestamp: DateTime<Utc>,
    /// Duration in minutes, if tracked
    pub duration_minutes: Option<u32>,
    /// Whether the user marked the activity as completed
    pub completed: bool,
    /// Mood score (0-100) recorded with the activity, if any
    pub mood_score: Option<u8>,
}

/// Payload for logging a new activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    /// Category of the activity
    pub kind: ActivityKind,
    /// Display name of the activity
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Duration in minutes, if tracked
    pub duration_minutes: Option<u32>,
}
