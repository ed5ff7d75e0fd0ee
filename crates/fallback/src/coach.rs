//! Keyword-matched sample coach replies.

use coach_core::{ChatMessage, UserProfile};

use crate::excerpt;

fn greeting_name(profile: Option<&UserProfile>) -> Option<&str> {
    profile.map(|profile| profile.display_name())
}

/// Substitute reply for the main coach conversation.
///
/// A handful of keyword families get tailored responses; anything else gets
/// a gentle generic redirect. The reply echoes the user's name when known.
pub fn coach_reply(user_message: &str, profile: Option<&UserProfile>) -> ChatMessage {
    let lower = user_message.to_lowercase();
    let name_suffix = greeting_name(profile)
        .map(|name| format!(", {name}"))
        .unwrap_or_default();

    let (text, suggestions): (String, Vec<&str>) = if lower.contains("hello") || lower.contains("hi") {
        (
            format!(
                "Hello{}! How can I assist you in your spiritual journey today?",
                greeting_name(profile)
                    .map(|name| format!(" {name}"))
                    .unwrap_or_default()
            ),
            vec![
                "I'd like a Bible passage recommendation.",
                "Can we discuss a topic?",
                "I have a question about faith.",
            ],
        )
    } else if lower.contains("stress") || lower.contains("anxious") {
        (
            "I understand that stress and anxiety can be challenging. Philippians 4:6-7 reminds us, \
             'Do not be anxious about anything, but in every situation, by prayer and petition, with \
             thanksgiving, present your requests to God. And the peace of God, which transcends all \
             understanding, will guard your hearts and your minds in Christ Jesus.' Would you like to \
             explore this passage further?"
                .to_string(),
            vec![
                "Yes, let's explore Philippians 4:6-7.",
                "What are other passages about peace?",
                "How can I apply this?",
            ],
        )
    } else if lower.contains("joy") || lower.contains("happy") {
        (
            "It's wonderful to hear you're experiencing joy! Nehemiah 8:10 says, 'The joy of the Lord \
             is your strength.' How are you seeing God's joy in your life right now?"
                .to_string(),
            vec![
                "What does 'joy of the Lord' mean?",
                "Share more about Nehemiah 8:10.",
                "How can I cultivate more joy?",
            ],
        )
    } else if lower.contains("doubt") || lower.contains("question") {
        (
            "It's perfectly normal to have questions and doubts on our faith journey. Jude 1:22 \
             encourages us to 'be merciful to those who doubt.' What specific questions are on your \
             mind?"
                .to_string(),
            vec![
                "Is it okay to doubt?",
                "Where can I find answers?",
                "Recommend resources for doubters.",
            ],
        )
    } else if lower.contains("interpret") && (lower.contains("john 3:16") || lower.contains("romans 8:28")) {
        let passage = if lower.contains("john 3:16") { "John 3:16" } else { "Romans 8:28" };
        (
            format!(
                "Ah, {passage} is a very significant passage! Many theologians have offered insights. \
                 For example, concerning {passage}, we could look at what Gregory of Nyssa or Luther \
                 thought. Would you like to explore perspectives on this passage in the \
                 'Interpretations' section?"
            ),
            vec![
                "Tell me about Gregory of Nyssa on this passage",
                "What did Luther say about it?",
                "Take me to Interpretations.",
            ],
        )
    } else {
        (
            format!(
                "Thank you for sharing that{name_suffix}. How can I help you reflect on this \
                 biblically? Perhaps we can find a relevant scripture or discuss a theological concept?"
            ),
            vec![
                "Tell me more.",
                "What Bible passage comes to mind?",
                "How does this relate to your week?",
            ],
        )
    };

    ChatMessage::ai(text, suggestions.into_iter().map(str::to_string).collect())
}

/// Substitute reply for the quick-coach widget: shorter, at most two
/// suggestions, and a pointer to the full coach page.
pub fn quick_coach_reply(user_message: &str, profile: Option<&UserProfile>) -> ChatMessage {
    let lower = user_message.to_lowercase();
    let name = greeting_name(profile).unwrap_or("User");

    let text = if lower.contains("hello") || lower.contains("hi") {
        format!("Hello {name}! Quick question? Or head to the full Coach for more.")
    } else {
        format!(
            "Hi {name}! You said: \"{}\". For a deeper chat, please use the full Coach page.",
            excerpt(user_message, 30)
        )
    };

    ChatMessage::ai(
        text,
        vec!["Tell me a verse.".to_string(), "What's a good focus?".to_string()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::{BibleKnowledgeLevel, MessageSender};

    fn profile() -> UserProfile {
        UserProfile::new(
            Some("Ana".to_string()),
            "Connect more deeply with God",
            BibleKnowledgeLevel::Beginner,
            "Exploring",
        )
    }

    #[test]
    fn test_greeting_uses_name() {
        let reply = coach_reply("Hello there", Some(&profile()));
        assert_eq!(reply.sender, MessageSender::Ai);
        assert!(reply.text.contains("Hello Ana"));
        assert_eq!(reply.suggestions.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_anxiety_points_to_philippians() {
        let reply = coach_reply("I've been so anxious lately", None);
        assert!(reply.text.contains("Philippians 4:6-7"));
    }

    #[test]
    fn test_generic_reply_without_profile() {
        let reply = coach_reply("struggling to be patient at work", None);
        assert!(reply.text.starts_with("Thank you for sharing that."));
        assert!(reply.suggestions.is_some());
    }

    #[test]
    fn test_quick_reply_echoes_and_caps_suggestions() {
        let reply = quick_coach_reply("What should I read tonight before bed?", Some(&profile()));
        assert!(reply.text.contains("Ana"));
        assert!(reply.suggestions.as_ref().unwrap().len() <= 2);
    }
}
