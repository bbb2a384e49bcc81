//! Activity calendar bucketizer.
//!
//! Projects the raw activity list onto a fixed-length rolling window of
//! per-day activity-level buckets.

use super::activity::{ActivityKind, ActivityRecord};
use chrono::{DateTime, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Number of days in the rolling calendar window.
pub const CALENDAR_DAYS: usize = 28;

/// How much activity a calendar day saw, classified by count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    None,
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    /// Classifies an activity count: 0 is none, 1-2 low, 3-4 medium,
    /// 5 and above high.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1..=2 => Self::Low,
            3..=4 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// One activity projected into its calendar-day display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarActivity {
    pub kind: ActivityKind,
    pub name: String,
    pub completed: bool,
    /// Local wall-clock time of the activity, e.g. "9:30 AM"
    pub time: String,
}

/// One day of the rolling activity calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub level: ActivityLevel,
    /// The day's activities in source order
    pub activities: Vec<CalendarActivity>,
}

/// Buckets activities into the 28 most recent calendar days.
///
/// Returns exactly [`CALENDAR_DAYS`] entries, oldest first, ending at the
/// calendar day of `now` inclusive. Each day covers the half-open interval
/// of that date in `now`'s time zone. The whole window is regenerated on
/// every call; fully deterministic for a fixed activity list and a fixed
/// `now`.
pub fn bucketize<Tz>(activities: &[ActivityRecord], now: &DateTime<Tz>) -> Vec<CalendarDay>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let today = now.date_naive();
    let tz = now.timezone();

    (0..CALENDAR_DAYS)
        .map(|i| {
            let date = today - Days::new((CALENDAR_DAYS - 1 - i) as u64);
            let days_activities: Vec<&ActivityRecord> = activities
                .iter()
                .filter(|a| a.timestamp.with_timezone(&tz).date_naive() == date)
                .collect();

            CalendarDay {
                date,
                level: ActivityLevel::from_count(days_activities.len()),
                activities: days_activities
                    .iter()
                    .map(|a| CalendarActivity {
                        kind: a.kind.clone(),
                        name: a.name.clone(),
                        completed: a.completed,
                        time: a
                            .timestamp
                            .with_timezone(&tz)
                            .format("%-I:%M %p")
                            .to_string(),
                    })
                    .collect(),
            }
        })
        .collect()
}
