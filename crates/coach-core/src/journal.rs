//! Prayer request and journal entry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Tags offered when composing a journal entry.
pub const PREDEFINED_JOURNAL_TAGS: [&str; 10] = [
    "Gratitude",
    "Doubt",
    "Hope",
    "Scripture Reflection",
    "Answered Prayer",
    "Challenge",
    "Growth",
    "Peace",
    "Guidance",
    "Confession",
];

/// A logged prayer request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequest {
    pub id: String,
    pub text: String,
    #[serde(with = "timestamp", default = "timestamp::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_answered: bool,
    #[serde(default)]
    pub shared_with_community: bool,
}

impl PrayerRequest {
    /// Create a new request stamped now.
    pub fn new(text: impl Into<String>, shared_with_community: bool) -> Self {
        let now = Utc::now();
        Self {
            id: format!("pr-{}", now.timestamp_millis()),
            text: text.into(),
            timestamp: now,
            is_answered: false,
            shared_with_community,
        }
    }
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(with = "timestamp", default = "timestamp::now")]
    pub timestamp: DateTime<Utc>,
    /// e.g. "Hopeful", "Reflective".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Themes identified by analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<String>>,
    /// User-chosen tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl JournalEntry {
    /// Create a new entry stamped now.
    pub fn new(title: impl Into<String>, text: impl Into<String>, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("je-{}", now.timestamp_millis()),
            title: title.into(),
            text: text.into(),
            timestamp: now,
            mood: None,
            themes: None,
            tags: if tags.is_empty() { None } else { Some(tags) },
        }
    }
}

/// Structured analysis of a passage for journaling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageAnalysis {
    pub theme: String,
    pub key_verse: String,
    pub application_point: String,
}
