//! Substitute planner content.

use coach_core::{
    ActivitySuggestion, ActivityType, BibleStudyIntensity, DayPlan, UserProfile, WeeklyStudyPlan,
    DAYS_OF_WEEK,
};

fn goal_or_default(profile: Option<&UserProfile>) -> &str {
    profile
        .map(|profile| profile.spiritual_goal.as_str())
        .filter(|goal| !goal.is_empty())
        .unwrap_or("spiritual growth")
}

/// Substitute focus suggestion for one planned activity.
pub fn activity_suggestion(
    activity_type: ActivityType,
    day_of_week: &str,
    profile: Option<&UserProfile>,
) -> ActivitySuggestion {
    let passage = match activity_type {
        ActivityType::PrayerTime => "Psalm 19:14",
        ActivityType::Journaling => "Psalm 119:105",
        _ => "John 15:5",
    };
    ActivitySuggestion {
        suggestion: format!(
            "For {activity_type} on {day_of_week}: consider reflecting on the theme of '{}' \
             through {passage}.",
            goal_or_default(profile)
        ),
        passage_ref: Some(passage.to_string()),
    }
}

/// Substitute 7-day study plan scaled to the requested intensity.
pub fn weekly_plan(intensity: BibleStudyIntensity, profile: Option<&UserProfile>) -> WeeklyStudyPlan {
    let goal = goal_or_default(profile);

    // One rotating focus per weekday; passages stay broadly devotional.
    let focuses: [(&str, &str); 7] = [
        ("Begin the week resting in God's care", "Psalms 23"),
        ("The Word at the heart of creation", "John 1:1-18"),
        ("God's love and the invitation to believe", "John 3:16-21"),
        ("All things working for good", "Romans 8:28-39"),
        ("Living as a branch on the vine", "John 15:1-8"),
        ("Bringing anxieties to God in prayer", "Philippians 4:4-9"),
        ("Review the week and give thanks", ""),
    ];

    let tasks_per_day = match intensity {
        BibleStudyIntensity::Light => 1,
        BibleStudyIntensity::Moderate => 2,
        BibleStudyIntensity::DeepDive => 3,
    };

    let daily_plan = DAYS_OF_WEEK
        .iter()
        .zip(focuses.iter())
        .map(|(day, (focus, passage))| {
            let mut tasks =
                vec!["Read the passage slowly and note one phrase that stands out.".to_string()];
            if tasks_per_day >= 2 {
                tasks.push(format!("Write a sentence connecting it to your goal: {goal}."));
            }
            if tasks_per_day >= 3 {
                tasks.push("Look up one cross-reference and compare the emphasis.".to_string());
            }
            DayPlan {
                day: (*day).to_string(),
                focus: (*focus).to_string(),
                passage: if passage.is_empty() {
                    None
                } else {
                    Some((*passage).to_string())
                },
                tasks: Some(tasks),
            }
        })
        .collect();

    WeeklyStudyPlan {
        title: format!("A {} Week Toward '{goal}'", intensity.label()),
        daily_plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::BibleKnowledgeLevel;

    #[test]
    fn test_activity_passages_vary_by_type() {
        let prayer = activity_suggestion(ActivityType::PrayerTime, "Monday", None);
        assert_eq!(prayer.passage_ref.as_deref(), Some("Psalm 19:14"));
        assert!(prayer.suggestion.contains("Prayer Time"));
        assert!(prayer.suggestion.contains("Monday"));

        let study = activity_suggestion(ActivityType::BibleStudy, "Friday", None);
        assert_eq!(study.passage_ref.as_deref(), Some("John 15:5"));
    }

    #[test]
    fn test_weekly_plan_covers_seven_days() {
        let profile = UserProfile::new(
            None,
            "Explore theological topics",
            BibleKnowledgeLevel::Advanced,
            "Anglican",
        );
        let plan = weekly_plan(BibleStudyIntensity::DeepDive, Some(&profile));

        assert_eq!(plan.daily_plan.len(), 7);
        assert_eq!(plan.daily_plan[0].day, "Monday");
        assert_eq!(plan.daily_plan[6].day, "Sunday");
        assert!(plan.title.contains("Deep Dive"));
        assert!(plan.title.contains("Explore theological topics"));
        assert_eq!(plan.daily_plan[0].tasks.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_light_plan_has_fewer_tasks() {
        let plan = weekly_plan(BibleStudyIntensity::Light, None);
        assert_eq!(plan.daily_plan[0].tasks.as_ref().unwrap().len(), 1);
    }
}
