//! Guidance-hub and community operations.

use coach_core::{CommunityGroup, ScripturalWisdom, SuggestedGroup, UserProfile};

use crate::gateway::Gateway;
use crate::parse;
use crate::prompts;

impl Gateway {
    /// Short paraphrase applying a passage to a life situation.
    pub async fn contextualized_scripture(&self, passage: &str, life_situation: &str) -> String {
        self.attempt(
            "contextualized_scripture",
            prompts::contextualize(passage, life_situation),
            parse::non_empty_text,
            || fallback::contextualized_scripture(passage, life_situation),
        )
        .await
    }

    /// Titled scriptural wisdom for a situation, with an optional passage.
    pub async fn scriptural_wisdom(
        &self,
        situation: &str,
        profile: Option<&UserProfile>,
    ) -> ScripturalWisdom {
        self.attempt(
            "scriptural_wisdom",
            prompts::wisdom(situation, profile),
            |raw| parse::parse_json_payload::<ScripturalWisdom>(&raw),
            || fallback::scriptural_wisdom(situation),
        )
        .await
    }

    /// Up to `count` community-group suggestions for a user.
    ///
    /// Suggestions naming a group outside the supplied catalog are dropped;
    /// the model is not trusted to invent IDs.
    pub async fn suggested_groups(
        &self,
        profile: &UserProfile,
        all_groups: &[CommunityGroup],
        count: usize,
    ) -> Vec<SuggestedGroup> {
        self.attempt(
            "suggested_groups",
            prompts::groups(profile, all_groups, count),
            |raw| {
                let suggestions: Vec<SuggestedGroup> = parse::parse_json_payload(&raw)?;
                Ok(suggestions
                    .into_iter()
                    .filter(|suggestion| {
                        all_groups.iter().any(|group| group.id == suggestion.group_id)
                    })
                    .take(count)
                    .collect())
            },
            || fallback::suggested_groups(all_groups, count),
        )
        .await
    }
}
