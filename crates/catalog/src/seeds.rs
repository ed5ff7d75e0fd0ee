//! Seed content for an empty prayer/journal store.

use chrono::{Duration, Utc};
use coach_core::{JournalEntry, PrayerRequest};

/// Starter prayer requests shown to a first-time user.
pub fn sample_prayer_requests() -> Vec<PrayerRequest> {
    vec![
        PrayerRequest {
            id: "pr1".to_string(),
            text: "Praying for wisdom in a difficult work situation.".to_string(),
            timestamp: Utc::now() - Duration::days(2),
            is_answered: false,
            shared_with_community: true,
        },
        PrayerRequest {
            id: "pr2".to_string(),
            text: "For my family's health and safety.".to_string(),
            timestamp: Utc::now() - Duration::days(1),
            is_answered: false,
            shared_with_community: false,
        },
    ]
}

/// Starter journal entries shown to a first-time user.
pub fn sample_journal_entries() -> Vec<JournalEntry> {
    let entry = |id: &str,
                 title: &str,
                 text: &str,
                 age_hours: i64,
                 mood: &str,
                 themes: &[&str],
                 tags: &[&str]| JournalEntry {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        timestamp: Utc::now() - Duration::hours(age_hours),
        mood: Some(mood.to_string()),
        themes: Some(themes.iter().map(|theme| theme.to_string()).collect()),
        tags: Some(tags.iter().map(|tag| tag.to_string()).collect()),
    };
    vec![
        entry(
            "je1",
            "Reflections on Grace",
            "Today I was thinking about God's amazing grace and how it impacts my daily life. It's overwhelming sometimes.",
            36,
            "Hopeful",
            &["grace", "gratitude"],
            &["Gratitude", "Grace"],
        ),
        entry(
            "je2",
            "Struggles with Patience",
            "Finding it hard to be patient with my kids lately. Need to remember the fruit of the Spirit.",
            0,
            "Challenged",
            &["patience", "parenting", "fruit of the Spirit"],
            &["Challenge", "Growth"],
        ),
        entry(
            "je3",
            "Peace in the Storm",
            "Felt a real sense of peace today despite a lot of chaos around me. Reading Psalm 46 helped.",
            12,
            "Peaceful",
            &["peace", "scripture", "trust"],
            &["Peace", "Scripture Reflection"],
        ),
    ]
}
