//! Degraded-mode contract: with no model client configured, every gateway
//! operation still returns a fully-typed, non-empty result.

use coach_core::{ActivityType, BibleKnowledgeLevel, BibleStudyIntensity, ChatMessage, UserProfile};
use gemini_gateway::Gateway;

fn profile() -> UserProfile {
    UserProfile::new(
        Some("Ana".to_string()),
        "Develop a consistent prayer life",
        BibleKnowledgeLevel::Beginner,
        "Exploring",
    )
}

#[tokio::test]
async fn every_operation_answers_without_a_credential() {
    let gateway = Gateway::without_client();
    let profile = profile();
    let history = [ChatMessage::user("Where do I start?")];

    let interpretations = gateway
        .interpretations_for_passage("John 3:16", &["Catholic".to_string(), "Lutheran".to_string()])
        .await;
    assert_eq!(interpretations.len(), 2);
    assert!(interpretations.iter().all(|entry| !entry.summary.is_empty()));

    let synthesis = gateway
        .synthesized_interpretation("John 3:16", &["Catholic".to_string()])
        .await;
    assert!(!synthesis.is_empty());

    let verses = gateway.chapter_text("Genesis", 1).await;
    assert_eq!(verses.len(), 50);
    assert_eq!(
        verses[0],
        "1 In the beginning God created the heavens and the earth."
    );

    let reply = gateway
        .coach_response("I have a question about prayer", &history, Some(&profile))
        .await;
    assert!(!reply.text.is_empty());

    let quick = gateway
        .quick_coach_response("quick verse for today?", &history, Some(&profile))
        .await;
    assert!(!quick.text.is_empty());
    assert!(quick.suggestions.as_ref().map_or(0, Vec::len) <= 2);

    let analysis = gateway.analyze_passage_for_journal("Psalm 23").await;
    assert!(!analysis.theme.is_empty());
    assert!(!analysis.application_point.is_empty());

    let plan = gateway
        .weekly_study_plan(BibleStudyIntensity::Moderate, Some(&profile))
        .await;
    assert_eq!(plan.daily_plan.len(), 7);
    assert!(!plan.title.is_empty());

    let suggestion = gateway
        .activity_suggestion(ActivityType::BibleStudy, "Monday", Some(&profile))
        .await;
    assert!(!suggestion.suggestion.is_empty());

    let summary = gateway
        .summarize_journal_entries(&catalog::sample_journal_entries())
        .await;
    assert!(!summary.is_empty());

    let contextualized = gateway
        .contextualized_scripture("Philippians 4:6-7", "exam anxiety")
        .await;
    assert!(contextualized.contains("Philippians 4:6-7"));

    let prayer = gateway.personalized_prayer("a new job", Some(&profile)).await;
    assert!(!prayer.is_empty());

    let wisdom = gateway.scriptural_wisdom("feeling overwhelmed", Some(&profile)).await;
    assert!(!wisdom.title.is_empty());
    assert!(!wisdom.content.is_empty());

    let groups = gateway
        .suggested_groups(&profile, catalog::community_groups(), 3)
        .await;
    assert_eq!(groups.len(), 3);
    for suggested in &groups {
        assert!(catalog::community_groups()
            .iter()
            .any(|group| group.id == suggested.group_id));
    }
}
