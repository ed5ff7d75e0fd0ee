//! Guidance-hub payload types.

use serde::{Deserialize, Serialize};

/// Scriptural wisdom for a life situation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScripturalWisdom {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_ref: Option<String>,
}

/// A community-group suggestion with a personalized reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedGroup {
    pub group_id: String,
    pub reason: String,
}
