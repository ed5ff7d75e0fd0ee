//! Core types and contracts for the GrowthPath discipleship engine.
//!
//! This crate provides the shared vocabulary for the GrowthPath crates:
//!
//! - [`UserProfile`] and its preference types
//! - Study, journal, planner, and guidance payload types
//! - [`GatewayError`] - Error taxonomy for gateway operations
//! - [`GenerativeClient`] - Trait for the injectable external-model client
//! - [`ConversationLog`] - In-memory chat history per conversation surface
//!
//! # Example
//!
//! ```rust
//! use coach_core::{GenerativeClient, GatewayError, ModelRequest};
//! use async_trait::async_trait;
//!
//! struct MyClient;
//!
//! #[async_trait]
//! impl GenerativeClient for MyClient {
//!     async fn generate(&self, _request: &ModelRequest) -> Result<String, GatewayError> {
//!         Ok("a generated response".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyClient"
//!     }
//! }
//! ```

mod chat;
mod client;
mod error;
mod fingerprint;
mod guidance;
mod journal;
mod library;
mod planner;
mod profile;
pub mod timestamp;

pub use chat::{ChatMessage, ConversationLog, MessageSender};
pub use client::{GenerativeClient, ModelRequest, ResponseFormat};
pub use error::{GatewayError, Result};
pub use fingerprint::{fingerprint, stable_index};
pub use guidance::{ScripturalWisdom, SuggestedGroup};
pub use journal::{JournalEntry, PassageAnalysis, PrayerRequest, PREDEFINED_JOURNAL_TAGS};
pub use library::{
    BibleBook, CommunityGroup, Interpretation, SpiritualMilestone, Testament, Theologian,
};
pub use planner::{
    ActivitySuggestion, ActivityType, BibleStudyIntensity, DayPlan, PlannedActivity,
    WeeklyStudyPlan, DAYS_OF_WEEK,
};
pub use profile::{
    BibleKnowledgeLevel, CheckInFrequency, FeedbackLevel, NotificationSettings, UserProfile,
    PREMIUM_TIER_NAME, SUBSCRIPTION_PRICE,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
