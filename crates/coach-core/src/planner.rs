//! Weekly planner types.

use serde::{Deserialize, Serialize};

/// Planner day order.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The closed set of plannable activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "Bible Study")]
    BibleStudy,
    #[serde(rename = "Prayer Time")]
    PrayerTime,
    Journaling,
    Meditation,
    #[serde(rename = "Community Group")]
    CommunityGroup,
    #[serde(rename = "Rest & Reflection")]
    RestAndReflection,
}

impl ActivityType {
    /// All activity types, in display order.
    pub const ALL: [ActivityType; 6] = [
        ActivityType::BibleStudy,
        ActivityType::PrayerTime,
        ActivityType::Journaling,
        ActivityType::Meditation,
        ActivityType::CommunityGroup,
        ActivityType::RestAndReflection,
    ];

    /// Display label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::BibleStudy => "Bible Study",
            ActivityType::PrayerTime => "Prayer Time",
            ActivityType::Journaling => "Journaling",
            ActivityType::Meditation => "Meditation",
            ActivityType::CommunityGroup => "Community Group",
            ActivityType::RestAndReflection => "Rest & Reflection",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One planned activity in the weekly planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedActivity {
    pub id: String,
    /// e.g. "Monday".
    pub day_of_week: String,
    pub activity_type: ActivityType,
    /// e.g. "Morning", "8:00 AM".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    /// The core suggestion text.
    pub ai_suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Requested depth for a generated study week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BibleStudyIntensity {
    Light,
    #[default]
    Moderate,
    #[serde(rename = "Deep Dive")]
    DeepDive,
}

impl BibleStudyIntensity {
    /// Display label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            BibleStudyIntensity::Light => "Light",
            BibleStudyIntensity::Moderate => "Moderate",
            BibleStudyIntensity::DeepDive => "Deep Dive",
        }
    }
}

impl std::fmt::Display for BibleStudyIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of a generated weekly study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: String,
    /// Main theme or instruction for the day.
    pub focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
}

/// A titled 7-day study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStudyPlan {
    pub title: String,
    pub daily_plan: Vec<DayPlan>,
}

/// A focus suggestion for a single planned activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySuggestion {
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_ref: Option<String>,
}
