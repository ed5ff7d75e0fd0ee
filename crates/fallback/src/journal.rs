//! Substitute journal analysis, summary, and prayer content.

use coach_core::{JournalEntry, PassageAnalysis};

use crate::excerpt;

/// Substitute passage analysis, echoing the passage text.
pub fn passage_analysis(passage_text: &str) -> PassageAnalysis {
    let echo = excerpt(passage_text, 30);
    PassageAnalysis {
        theme: format!("God's Faithfulness (from {echo})"),
        key_verse: "Lamentations 3:22-23".to_string(),
        application_point: format!(
            "Trust in God's unwavering faithfulness daily, inspired by {echo}"
        ),
    }
}

/// Substitute journal summary.
pub fn journal_summary(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries to summarize.".to_string();
    }

    let mut tags: Vec<&str> = entries
        .iter()
        .flat_map(|entry| entry.tags.iter().flatten())
        .map(String::as_str)
        .collect();
    tags.sort();
    tags.dedup();

    let theme_line = if tags.is_empty() {
        "a pattern of reflection and seeking".to_string()
    } else {
        format!("recurring themes of {}", tags.join(", "))
    };

    format!(
        "Across your recent {} entries, {theme_line} stand out. You have been naming what you \
         notice and bringing it back to prayer. Keep exploring these areas!",
        entries.len()
    )
}

/// Substitute personalized prayer, echoing the situation.
pub fn personalized_prayer(situation: &str) -> String {
    format!(
        "A prayer for \"{}\":\nDear God, be with this person as they navigate this situation. \
         Grant them strength, wisdom, and peace. May they feel Your constant presence and loving \
         care. Amen.",
        excerpt(situation, 50)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_echoes_passage() {
        let analysis = passage_analysis("Psalm 46");
        assert!(analysis.theme.contains("Psalm 46"));
        assert!(!analysis.key_verse.is_empty());
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(journal_summary(&[]), "No entries to summarize.");
    }

    #[test]
    fn test_summary_names_tags_and_count() {
        let entries = catalog::sample_journal_entries();
        let summary = journal_summary(&entries);
        assert!(summary.contains("3 entries"));
        assert!(summary.contains("Gratitude"));
    }

    #[test]
    fn test_prayer_echoes_situation() {
        let prayer = personalized_prayer("my upcoming surgery");
        assert!(prayer.contains("my upcoming surgery"));
        assert!(prayer.ends_with("Amen."));
    }
}
