//! Weekly-plan and per-activity suggestion operations.

use coach_core::{
    ActivitySuggestion, ActivityType, BibleStudyIntensity, GatewayError, UserProfile,
    WeeklyStudyPlan,
};

use crate::gateway::Gateway;
use crate::parse;
use crate::prompts;

impl Gateway {
    /// A titled 7-day study plan scaled to the requested intensity.
    ///
    /// A plan with no days is degenerate and falls back.
    pub async fn weekly_study_plan(
        &self,
        intensity: BibleStudyIntensity,
        profile: Option<&UserProfile>,
    ) -> WeeklyStudyPlan {
        self.attempt(
            "weekly_study_plan",
            prompts::weekly_plan(intensity, profile),
            |raw| {
                let plan: WeeklyStudyPlan = parse::parse_json_payload(&raw)?;
                if plan.daily_plan.is_empty() {
                    return Err(GatewayError::EmptyResponse("plan has no days".to_string()));
                }
                Ok(plan)
            },
            || fallback::weekly_plan(intensity, profile),
        )
        .await
    }

    /// A focus suggestion for one planned activity.
    pub async fn activity_suggestion(
        &self,
        activity_type: ActivityType,
        day_of_week: &str,
        profile: Option<&UserProfile>,
    ) -> ActivitySuggestion {
        self.attempt(
            "activity_suggestion",
            prompts::activity(activity_type, day_of_week, profile),
            |raw| parse::parse_json_payload::<ActivitySuggestion>(&raw),
            || fallback::activity_suggestion(activity_type, day_of_week, profile),
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
    async fn test_plan_parses_structured_payload() {
        let gateway = Gateway::new(Arc::new(StubClient::with_text(
            r#"{"title": "Rooted in the Word",
                "dailyPlan": [{"day": "Monday", "focus": "Read Mark 1", "passage": "Mark 1",
                               "tasks": ["Note one command of Jesus"]}]}"#,
        )));

        let plan = gateway.weekly_study_plan(BibleStudyIntensity::Light, None).await;

        assert_eq!(plan.title, "Rooted in the Word");
        assert_eq!(plan.daily_plan.len(), 1);
        assert_eq!(plan.daily_plan[0].passage.as_deref(), Some("Mark 1"));
    }

    #[tokio::test]
    async fn test_empty_plan_is_degenerate_and_falls_back() {
        let gateway = Gateway::new(Arc::new(StubClient::with_text(
            r#"{"title": "Empty Week", "dailyPlan": []}"#,
        )));

        let plan = gateway.weekly_study_plan(BibleStudyIntensity::Moderate, None).await;

        assert_eq!(plan.daily_plan.len(), 7);
        assert_ne!(plan.title, "Empty Week");
    }

    #[tokio::test]
    async fn test_plan_without_credential_covers_seven_days() {
        let gateway = Gateway::without_client();

        let plan = gateway.weekly_study_plan(BibleStudyIntensity::DeepDive, None).await;

        assert_eq!(plan.daily_plan.len(), 7);
        assert_eq!(plan.daily_plan[0].day, "Monday");
    }

    #[tokio::test]
    async fn test_activity_suggestion_parses_optional_passage() {
        let gateway = Gateway::new(Arc::new(StubClient::with_text(
            r#"{"suggestion": "Reflect on a moment of gratitude this week."}"#,
        )));

        let suggestion = gateway
            .activity_suggestion(ActivityType::Journaling, "Wednesday", None)
            .await;

        assert!(suggestion.passage_ref.is_none());
        assert!(suggestion.suggestion.contains("gratitude"));
    }

    #[tokio::test]
    async fn test_activity_suggestion_without_credential() {
        let gateway = Gateway::without_client();

        let suggestion = gateway
            .activity_suggestion(ActivityType::PrayerTime, "Sunday", None)
            .await;

        assert!(suggestion.suggestion.contains("Prayer Time"));
        assert!(suggestion.suggestion.contains("Sunday"));
        assert_eq!(suggestion.passage_ref.as_deref(), Some("Psalm 19:14"));
    }
}
