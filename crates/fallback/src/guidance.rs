//! Substitute guidance-hub content.

use coach_core::{CommunityGroup, ScripturalWisdom, SuggestedGroup};

use crate::excerpt;

/// Substitute contextualized scripture, echoing passage and situation.
pub fn contextualized_scripture(passage: &str, life_situation: &str) -> String {
    format!(
        "Where {passage} speaks of God's promise, it also speaks into \"{}\": even in this, \
         remember the divine assurance of rest and renewal found in the scriptures. Hold onto the \
         enduring hope that your strength will be restored.",
        excerpt(life_situation, 40)
    )
}

/// Substitute scriptural wisdom for a situation.
pub fn scriptural_wisdom(situation: &str) -> ScripturalWisdom {
    ScripturalWisdom {
        title: "Finding Strength".to_string(),
        content: format!(
            "In times of \"{}\", remember that scripture offers profound comfort. Passages like \
             Psalm 46:1 can be a source of solace, reminding us that God is our refuge. Reflect on \
             how this truth can support you today.",
            excerpt(situation, 30)
        ),
        passage_ref: Some("Psalm 46:1".to_string()),
    }
}

/// Substitute group suggestions: the first `count` supplied groups, each
/// with a reason echoing the group's own name and focus.
pub fn suggested_groups(all_groups: &[CommunityGroup], count: usize) -> Vec<SuggestedGroup> {
    all_groups
        .iter()
        .take(count)
        .map(|group| SuggestedGroup {
            group_id: group.id.clone(),
            reason: format!(
                "This group, \"{}\", focusing on {}, seems like a good match for your interests.",
                group.name, group.focus_area
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contextualization_echoes_both_inputs() {
        let text = contextualized_scripture("Isaiah 40:31", "burnout at work");
        assert!(text.contains("Isaiah 40:31"));
        assert!(text.contains("burnout at work"));
    }

    #[test]
    fn test_wisdom_carries_a_passage() {
        let wisdom = scriptural_wisdom("fear about the future");
        assert_eq!(wisdom.title, "Finding Strength");
        assert!(wisdom.content.contains("fear about the future"));
        assert_eq!(wisdom.passage_ref.as_deref(), Some("Psalm 46:1"));
    }

    #[test]
    fn test_group_suggestions_come_from_supplied_catalog() {
        let groups = catalog::community_groups();
        let suggestions = suggested_groups(groups, 3);

        assert_eq!(suggestions.len(), 3);
        for suggestion in &suggestions {
            assert!(groups.iter().any(|group| group.id == suggestion.group_id));
        }
    }

    #[test]
    fn test_group_suggestions_capped_by_supply() {
        let groups = catalog::community_groups();
        let suggestions = suggested_groups(groups, 10);
        assert_eq!(suggestions.len(), groups.len());
    }
}
