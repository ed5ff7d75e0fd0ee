//! Gemini-backed AI gateway for GrowthPath.
//!
//! This crate translates typed, domain-specific requests (interpretation
//! lookups, coach conversations, weekly plans, prayers) into single calls
//! to Google's Gemini `generateContent` API and back into typed results.
//!
//! Every operation runs through one attempt-then-fallback driver: with no
//! credential configured, on a transport failure, or on a response that
//! does not parse, the operation returns a catalog-backed substitute of
//! the same type. Callers never see an error.
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_gateway::Gateway;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Reads GEMINI_API_KEY; proceeds in degraded mode when unset.
//!     let gateway = Gateway::from_env();
//!
//!     let verses = gateway.chapter_text("Genesis", 1).await;
//!     println!("{}", verses[0]);
//! }
//! ```

mod api_types;
mod client;
mod config;
mod gateway;
mod ops;
mod parse;
mod prompts;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use gateway::Gateway;

// Re-export coach-core types for convenience
pub use coach_core::{
    ActivitySuggestion, BibleStudyIntensity, ChatMessage, ConversationLog, GatewayError,
    GenerativeClient, Interpretation, ModelRequest, PassageAnalysis, ResponseFormat,
    ScripturalWisdom, SuggestedGroup, UserProfile, WeeklyStudyPlan,
};
