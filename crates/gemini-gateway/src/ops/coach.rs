//! Coach conversation operations.

use coach_core::{ChatMessage, UserProfile};
use serde::Deserialize;

use crate::gateway::Gateway;
use crate::parse;
use crate::prompts;

/// Structured coach turn returned by the model.
#[derive(Debug, Deserialize)]
struct CoachReply {
    reply: String,
    #[serde(default)]
    suggestions: Vec<String>,
}

fn into_message(reply: CoachReply, max_suggestions: usize) -> ChatMessage {
    let suggestions: Vec<String> = reply
        .suggestions
        .into_iter()
        .map(|suggestion| suggestion.trim().to_string())
        .filter(|suggestion| !suggestion.is_empty())
        .take(max_suggestions)
        .collect();
    ChatMessage::ai(reply.reply, suggestions)
}

impl Gateway {
    /// Next coach message for the main conversation: personalized reply
    /// plus up to 3 follow-up suggestions.
    ///
    /// A missing profile is treated like a missing credential: the sample
    /// coach cannot personalize, so the keyword-matched substitute answers.
    pub async fn coach_response(
        &self,
        user_message: &str,
        history: &[ChatMessage],
        profile: Option<&UserProfile>,
    ) -> ChatMessage {
        let Some(profile) = profile else {
            return fallback::coach_reply(user_message, None);
        };

        self.attempt(
            "coach_response",
            prompts::coach(user_message, history, profile),
            |raw| {
                let reply: CoachReply = parse::parse_json_payload(&raw)?;
                Ok(into_message(reply, 3))
            },
            || fallback::coach_reply(user_message, Some(profile)),
        )
        .await
    }

    /// Abbreviated coach message for the quick widget: short reply, only
    /// the last few history entries considered, at most 2 suggestions.
    pub async fn quick_coach_response(
        &self,
        user_message: &str,
        history: &[ChatMessage],
        profile: Option<&UserProfile>,
    ) -> ChatMessage {
        let Some(profile) = profile else {
            return fallback::quick_coach_reply(user_message, None);
        };

        let recent_start = history.len().saturating_sub(4);
        self.attempt(
            "quick_coach_response",
            prompts::quick_coach(user_message, &history[recent_start..], profile),
            |raw| {
                let reply: CoachReply = parse::parse_json_payload(&raw)?;
                Ok(into_message(reply, 2))
            },
            || fallback::quick_coach_reply(user_message, Some(profile)),
        )
        .await
    }
}
