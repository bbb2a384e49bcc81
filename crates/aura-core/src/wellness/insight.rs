//! Insight rule engine.
//!
//! Derives a short, prioritized list of recommendations from the current
//! activity and mood state.

use super::activity::ActivityRecord;
use super::summary::DailySummary;
use serde::{Deserialize, Serialize};

/// How prominently an insight should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    Low,
    Medium,
    High,
}

/// A single human-readable recommendation.
///
/// Derived and transient; recomputed whenever the activities or the daily
/// summary change. Presentation concerns (icons, colors) live outside the
/// core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub priority: InsightPriority,
}

impl Insight {
    fn new(title: &str, description: String, priority: InsightPriority) -> Self {
        Self {
            title: title.to_string(),
            description,
            priority,
        }
    }
}

/// The maximum number of insights returned to callers.
pub const MAX_INSIGHTS: usize = 3;

/// Derives the insight list from the current state.
///
/// Rules are evaluated in fixed declaration order and the result is
/// truncated to the first [`MAX_INSIGHTS`] entries in that order (never
/// re-sorted by priority): two rules of equal priority keep their fixed
/// relative position. Total: never fails, for any combination of
/// present/absent inputs.
pub fn derive_insights(_activities: &[ActivityRecord], summary: &DailySummary) -> Vec<Insight> {
    let mut insights = Vec::new();

    // The list is never empty: the welcome insight always fires.
    insights.push(Insight::new(
        "Welcome to Your Wellness Journey",
        "Start by tracking your mood or trying a therapy session to receive personalized insights."
            .to_string(),
        InsightPriority::Medium,
    ));

    // The two mood rules are mutually exclusive with each other.
    match summary.mood_score {
        None => insights.push(Insight::new(
            "Track Your First Mood",
            "Log your mood today to get personalized insights and track your emotional wellbeing."
                .to_string(),
            InsightPriority::High,
        )),
        Some(score) if score < 50 => insights.push(Insight::new(
            "Mood Support Available",
            "Your mood could use some support. Try a calming activity or therapy session."
                .to_string(),
            InsightPriority::High,
        )),
        Some(_) => {}
    }

    if summary.activity_count == 0 {
        insights.push(Insight::new(
            "Start with Activities",
            "Try logging your first activity to build healthy habits and track your progress."
                .to_string(),
            InsightPriority::Medium,
        ));
    }

    if summary.session_count > 0 {
        insights.push(Insight::new(
            "Therapy Progress",
            format!(
                "You've completed {} therapy sessions! That's great consistency.",
                summary.session_count
            ),
            InsightPriority::High,
        ));
    }

    if summary.activity_count > 0 && summary.completion_rate == 0 {
        insights.push(Insight::new(
            "Complete Your Activities",
            format!(
                "You have {} activities planned. Try completing one to boost your progress!",
                summary.activity_count
            ),
            InsightPriority::Medium,
        ));
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}
