//! Journal analysis, summary, and prayer operations.

use coach_core::{JournalEntry, PassageAnalysis, UserProfile};

use crate::gateway::Gateway;
use crate::parse;
use crate::prompts;

impl Gateway {
    /// Analyze a passage for journaling: theme, key verse, application.
    pub async fn analyze_passage_for_journal(&self, passage_text: &str) -> PassageAnalysis {
        self.attempt(
            "analyze_passage_for_journal",
            prompts::journal_analysis(passage_text),
            |raw| parse::parse_json_payload::<PassageAnalysis>(&raw),
            || fallback::passage_analysis(passage_text),
        )
        .await
    }

    /// Short narrative summary of recent journal entries.
    ///
    /// Zero entries short-circuits without a model call.
    pub async fn summarize_journal_entries(&self, entries: &[JournalEntry]) -> String {
        if entries.is_empty() {
            return "No entries to summarize.".to_string();
        }

        self.attempt(
            "summarize_journal_entries",
            prompts::journal_summary(entries),
            parse::non_empty_text,
            || fallback::journal_summary(entries),
        )
        .await
    }

    /// A personalized prayer (~50-100 words) for a situation.
    pub async fn personalized_prayer(
        &self,
        situation: &str,
        profile: Option<&UserProfile>,
    ) -> String {
        self.attempt(
            "personalized_prayer",
            prompts::prayer(situation, profile),
            parse::non_empty_text,
            || fallback::personalized_prayer(situation),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::test_util::StubClient;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_analysis_parses_structured_payload() {
        let gateway = Gateway::new(Arc::new(StubClient::with_text(
            r#"{"theme": "Trust", "keyVerse": "Proverbs 3:5", "applicationPoint": "Lean on God today."}"#,
        )));

        let analysis = gateway.analyze_passage_for_journal("Proverbs 3").await;

        assert_eq!(analysis.theme, "Trust");
        assert_eq!(analysis.key_verse, "Proverbs 3:5");
    }

    #[tokio::test]
    async fn test_analysis_without_credential_echoes_passage() {
        let gateway = Gateway::without_client();

        let analysis = gateway.analyze_passage_for_journal("Psalm 46").await;

        assert!(analysis.theme.contains("Psalm 46"));
        assert!(!analysis.application_point.is_empty());
    }

    #[tokio::test]
    async fn test_summary_of_no_entries_never_calls_the_model() {
        let gateway = Gateway::new(Arc::new(StubClient::with_text("should not be used")));

        let summary = gateway.summarize_journal_entries(&[]).await;

        assert_eq!(summary, "No entries to summarize.");
    }

    #[tokio::test]
    async fn test_summary_falls_back_on_failure() {
        let gateway = Gateway::new(Arc::new(StubClient::failing()));
        let entries = catalog::sample_journal_entries();

        let summary = gateway.summarize_journal_entries(&entries).await;

        assert!(summary.contains("3 entries"));
    }

    #[tokio::test]
    async fn test_prayer_without_credential_echoes_situation() {
        let gateway = Gateway::without_client();

        let prayer = gateway.personalized_prayer("an exam tomorrow", None).await;

        assert!(prayer.contains("an exam tomorrow"));
        assert!(prayer.contains("Amen."));
    }

    #[tokio::test]
    async fn test_prayer_uses_model_text_when_available() {
        let gateway = Gateway::new(Arc::new(StubClient::with_text(
            "Lord, grant peace before tomorrow's exam. Amen.",
        )));

        let prayer = gateway.personalized_prayer("an exam tomorrow", None).await;

        assert_eq!(prayer, "Lord, grant peace before tomorrow's exam. Amen.");
    }
}
