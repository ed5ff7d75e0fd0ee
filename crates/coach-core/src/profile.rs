//! User profile and preference types.

use serde::{Deserialize, Serialize};

use crate::library::Interpretation;

/// Display name of the paid tier.
pub const PREMIUM_TIER_NAME: &str = "Pro";

/// Monthly subscription price in USD.
pub const SUBSCRIPTION_PRICE: f64 = 6.99;

/// Self-assessed Bible knowledge level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BibleKnowledgeLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// How verbose the AI coach should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FeedbackLevel {
    Brief,
    #[default]
    Detailed,
}

/// How often the AI coach should proactively check in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CheckInFrequency {
    #[default]
    Daily,
    EveryFewDays,
    Weekly,
}

fn default_true() -> bool {
    true
}

/// Named notification toggles.
///
/// Field-level defaults give merge-on-read semantics: a stored document
/// missing a key fills that key from the default set, while present keys
/// override it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(default = "default_true")]
    pub prayer_reminders: bool,
    #[serde(default = "default_true")]
    pub milestone_alerts: bool,
    #[serde(default = "default_true")]
    pub community_updates: bool,
    #[serde(default = "default_true")]
    pub journal_reminders: bool,
    #[serde(default)]
    pub ai_coach_prompts: bool,
    #[serde(default = "default_true")]
    pub scripture_suggestions: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            prayer_reminders: true,
            milestone_alerts: true,
            community_updates: true,
            journal_reminders: true,
            ai_coach_prompts: false,
            scripture_suggestions: true,
        }
    }
}

fn default_goal() -> String {
    "Understand the Bible better".to_string()
}

fn default_tradition() -> String {
    "Exploring".to_string()
}

fn default_translation() -> Option<String> {
    Some("NIV".to_string())
}

fn default_devotional_time() -> Option<String> {
    Some("Flexible".to_string())
}

/// The user profile, created at onboarding and mutated in place by the
/// settings and library surfaces. Persisted as one whole JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_goal")]
    pub spiritual_goal: String,
    #[serde(default)]
    pub bible_knowledge: BibleKnowledgeLevel,
    /// A tradition name, or one of the sentinels "Exploring" / "None".
    #[serde(default = "default_tradition")]
    pub preferred_tradition: String,
    #[serde(default)]
    pub is_subscribed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_tier: Option<String>,
    #[serde(default)]
    pub spiritual_interests: Option<String>,
    #[serde(default = "default_translation")]
    pub preferred_bible_translation: Option<String>,
    #[serde(default = "default_devotional_time")]
    pub devotional_time_preference: Option<String>,
    #[serde(default)]
    pub ai_feedback_level: FeedbackLevel,
    #[serde(default)]
    pub ai_check_in_frequency: CheckInFrequency,
    #[serde(default)]
    pub notification_settings: NotificationSettings,
    /// "Book Chapter" references, set semantics.
    #[serde(default)]
    pub read_chapters: Vec<String>,
    #[serde(default)]
    pub saved_interpretations: Vec<Interpretation>,
}

impl UserProfile {
    /// Create the profile captured at onboarding completion.
    pub fn new(
        name: Option<String>,
        spiritual_goal: impl Into<String>,
        bible_knowledge: BibleKnowledgeLevel,
        preferred_tradition: impl Into<String>,
    ) -> Self {
        Self {
            name,
            spiritual_goal: spiritual_goal.into(),
            bible_knowledge,
            preferred_tradition: preferred_tradition.into(),
            is_subscribed: false,
            subscription_tier: None,
            spiritual_interests: None,
            preferred_bible_translation: default_translation(),
            devotional_time_preference: default_devotional_time(),
            ai_feedback_level: FeedbackLevel::default(),
            ai_check_in_frequency: CheckInFrequency::default(),
            notification_settings: NotificationSettings::default(),
            read_chapters: Vec::new(),
            saved_interpretations: Vec::new(),
        }
    }

    /// The name to address the user by.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("User")
    }

    /// Activate the paid tier.
    pub fn subscribe(&mut self) {
        self.is_subscribed = true;
        self.subscription_tier = Some(PREMIUM_TIER_NAME.to_string());
    }

    /// Record a chapter as read. Idempotent.
    pub fn mark_chapter_read(&mut self, chapter_ref: impl Into<String>) {
        let chapter_ref = chapter_ref.into();
        if !self.read_chapters.contains(&chapter_ref) {
            self.read_chapters.push(chapter_ref);
        }
    }

    /// Keep an interpretation in the saved list. Duplicates by id are ignored.
    pub fn save_interpretation(&mut self, interpretation: Interpretation) {
        if !self
            .saved_interpretations
            .iter()
            .any(|saved| saved.id == interpretation.id)
        {
            self.saved_interpretations.push(interpretation);
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(None, default_goal(), BibleKnowledgeLevel::Beginner, default_tradition())
    }
}
