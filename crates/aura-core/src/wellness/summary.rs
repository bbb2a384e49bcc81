//! Daily summary aggregation.
//!
//! Merges the outputs of the independent wellness sources into one
//! `DailySummary` snapshot for the current calendar day.

use super::activity::ActivityRecord;
use super::mood::MoodSample;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The derived wellness metrics for one calendar day.
///
/// Recomputed as a whole on every refresh; every field is a pure function
/// of the inputs at computation time. Never persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Today's mood score (0-100), if a sample exists
    pub mood_score: Option<u8>,
    /// 100 when any activity was logged today, 0 otherwise
    pub completion_rate: u8,
    /// Total number of conversation sessions (not filtered to today)
    pub session_count: usize,
    /// Number of activities logged today
    pub activity_count: usize,
    /// When this summary was computed
    pub computed_at: DateTime<Utc>,
}

/// Computes the daily summary from the source data.
///
/// Total: any missing optional input degrades the corresponding field to
/// its `None`/zero default instead of failing.
///
/// # Arguments
///
/// * `activities` - Raw activity list; filtered here to the calendar day
///   of `now` (half-open interval in `now`'s time zone)
/// * `mood` - Today's mood sample, if the source yielded one
/// * `session_count` - Total session count, passed through unchanged
/// * `now` - The current instant; injected so the result is deterministic
pub fn aggregate<Tz>(
    activities: &[ActivityRecord],
    mood: Option<&MoodSample>,
    session_count: usize,
    now: &DateTime<Tz>,
) -> DailySummary
where
    Tz: TimeZone,
{
    let today = now.date_naive();
    let tz = now.timezone();
    let activity_count = activities
        .iter()
        .filter(|a| a.timestamp.with_timezone(&tz).date_naive() == today)
        .count();

    DailySummary {
        mood_score: mood.map(|m| m.score),
        completion_rate: if activity_count > 0 { 100 } else { 0 },
        session_count,
        activity_count,
        computed_at: now.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wellness::activity::ActivityKind;
    use chrono::FixedOffset;

    fn activity_at(timestamp: DateTime<Utc>) -> ActivityRecord {
        ActivityRecord {
            id: "a-1".to_string(),
            kind: ActivityKind::Game,
            name: "Breathing".to_string(),
            description: None,
            timestamp,
            duration_minutes: Some(5),
            completed: false,
            mood_score: None,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_inputs_yield_zeroed_summary() {
        let summary = aggregate(&[], None, 0, &noon());
        assert_eq!(summary.mood_score, None);
        assert_eq!(summary.completion_rate, 0);
        assert_eq!(summary.session_count, 0);
        assert_eq!(summary.activity_count, 0);
    }

    #[test]
    fn activity_today_sets_completion_rate_to_100() {
        let activities = vec![activity_at(Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 0).unwrap())];
        let mood = MoodSample {
            score: 30,
            captured_at: noon(),
        };
        let summary = aggregate(&activities, Some(&mood), 2, &noon());
        assert_eq!(summary.mood_score, Some(30));
        assert_eq!(summary.completion_rate, 100);
        assert_eq!(summary.session_count, 2);
        assert_eq!(summary.activity_count, 1);
    }

    #[test]
    fn day_interval_is_half_open() {
        // Midnight today is inside, the last millisecond of yesterday is not.
        let midnight = activity_at(Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap());
        let yesterday_late = activity_at(Utc.with_ymd_and_hms(2026, 8, 5, 23, 59, 59).unwrap());
        let summary = aggregate(&[midnight, yesterday_late], None, 0, &noon());
        assert_eq!(summary.activity_count, 1);
        assert_eq!(summary.completion_rate, 100);
    }

    #[test]
    fn day_boundary_follows_the_callers_time_zone() {
        // 23:30 UTC on Aug 5 is already Aug 6 at +02:00.
        let activity = activity_at(Utc.with_ymd_and_hms(2026, 8, 5, 23, 30, 0).unwrap());
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local_now = offset.with_ymd_and_hms(2026, 8, 6, 0, 45, 0).unwrap();

        let summary = aggregate(&[activity.clone()], None, 0, &local_now);
        assert_eq!(summary.activity_count, 1);

        // The same instant viewed from UTC still belongs to Aug 5.
        let utc_now = Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap();
        let summary = aggregate(&[activity], None, 0, &utc_now);
        assert_eq!(summary.activity_count, 0);
    }

    #[test]
    fn session_count_is_passed_through_unfiltered() {
        let summary = aggregate(&[], None, 7, &noon());
        assert_eq!(summary.session_count, 7);
        assert_eq!(summary.activity_count, 0);
    }
}
