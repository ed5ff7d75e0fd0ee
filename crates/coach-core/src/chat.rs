//! Chat messages and the in-memory conversation log.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::timestamp;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Ai,
}

/// A single message in a coach conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: MessageSender,
    pub text: String,
    #[serde(with = "timestamp", default = "timestamp::now")]
    pub timestamp: DateTime<Utc>,
    /// Follow-up suggestions offered alongside an AI message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ChatMessage {
    /// Create a user message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("user-{}", now.timestamp_millis()),
            sender: MessageSender::User,
            text: text.into(),
            timestamp: now,
            suggestions: None,
        }
    }

    /// Create an AI message stamped now, with optional follow-up suggestions.
    pub fn ai(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("ai-{}", now.timestamp_millis()),
            sender: MessageSender::Ai,
            text: text.into(),
            timestamp: now,
            suggestions: if suggestions.is_empty() {
                None
            } else {
                Some(suggestions)
            },
        }
    }
}

/// In-memory conversation log, keyed by conversation surface.
///
/// Each surface (the main coach page, the quick widget) keeps its own
/// ordered message sequence, trimmed to a maximum number of turns so a long
/// session cannot grow without bound. Nothing here is persisted.
#[derive(Debug)]
pub struct ConversationLog {
    surfaces: RwLock<IndexMap<String, Vec<ChatMessage>>>,
    /// Maximum number of turns (user + AI pairs) to keep per surface.
    max_turns: usize,
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ConversationLog {
    /// Create a new log keeping at most `max_turns` turns per surface.
    pub fn new(max_turns: usize) -> Self {
        Self {
            surfaces: RwLock::new(IndexMap::new()),
            max_turns,
        }
    }

    /// Append a message to a surface, trimming the oldest turns when over
    /// the limit.
    pub async fn append(&self, surface: &str, message: ChatMessage) {
        let mut surfaces = self.surfaces.write().await;
        let log = surfaces.entry(surface.to_string()).or_default();
        log.push(message);

        let max_messages = self.max_turns * 2;
        if log.len() > max_messages {
            let to_remove = log.len() - max_messages;
            log.drain(0..to_remove);
        }
    }

    /// All messages for a surface, oldest first.
    pub async fn messages(&self, surface: &str) -> Vec<ChatMessage> {
        let surfaces = self.surfaces.read().await;
        surfaces.get(surface).cloned().unwrap_or_default()
    }

    /// The last `count` messages for a surface, oldest first.
    pub async fn recent(&self, surface: &str, count: usize) -> Vec<ChatMessage> {
        let surfaces = self.surfaces.read().await;
        match surfaces.get(surface) {
            Some(log) => {
                let start = log.len().saturating_sub(count);
                log[start..].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Drop a surface's messages.
    pub async fn clear(&self, surface: &str) {
        let mut surfaces = self.surfaces.write().await;
        surfaces.shift_remove(surface);
    }

    /// Drop everything.
    pub async fn clear_all(&self) {
        let mut surfaces = self.surfaces.write().await;
        surfaces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_and_read() {
        let log = ConversationLog::new(5);

        log.append("coach", ChatMessage::user("Hello")).await;
        log.append("coach", ChatMessage::ai("Hi there!", vec![])).await;

        let messages = log.messages("coach").await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, MessageSender::User);
        assert_eq!(messages[0].text, "Hello");
        assert_eq!(messages[1].sender, MessageSender::Ai);
    }

    #[tokio::test]
    async fn test_trimming_keeps_latest_turns() {
        let log = ConversationLog::new(2);

        for round in 0..4 {
            log.append("coach", ChatMessage::user(format!("q{round}"))).await;
            log.append("coach", ChatMessage::ai(format!("a{round}"), vec![])).await;
        }

        let messages = log.messages("coach").await;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].text, "q2");
        assert_eq!(messages[3].text, "a3");
    }

    #[tokio::test]
    async fn test_surfaces_are_independent() {
        let log = ConversationLog::new(5);

        log.append("coach", ChatMessage::user("long form")).await;
        log.append("widget", ChatMessage::user("quick one")).await;

        assert_eq!(log.messages("coach").await.len(), 1);
        assert_eq!(log.messages("widget").await.len(), 1);

        log.clear("widget").await;
        assert!(log.messages("widget").await.is_empty());
        assert_eq!(log.messages("coach").await.len(), 1);
    }

    #[tokio::test]
    async fn test_recent_takes_the_tail() {
        let log = ConversationLog::new(10);

        for round in 0..3 {
            log.append("widget", ChatMessage::user(format!("q{round}"))).await;
            log.append("widget", ChatMessage::ai(format!("a{round}"), vec![])).await;
        }

        let recent = log.recent("widget", 4).await;
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].text, "q1");
        assert_eq!(recent[3].text, "a2");
    }

    #[test]
    fn test_chat_message_normalizes_bad_timestamp() {
        let message: ChatMessage = serde_json::from_str(
            r#"{"id": "m1", "sender": "ai", "text": "hi", "timestamp": "garbage"}"#,
        )
        .unwrap();

        // A bad stored timestamp becomes a valid date rather than an error.
        assert!(message.timestamp.timestamp() > 0);
    }
}
