//! Substitute interpretations built from the catalog.

use coach_core::Interpretation;

fn slug(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .to_lowercase()
}

/// A generic descriptor for a tradition with no catalogued members.
pub(crate) fn generic_theologian_descriptor(tradition: &str) -> String {
    if tradition.eq_ignore_ascii_case("Christian") {
        "a prominent Christian theologian known for insightful biblical commentary".to_string()
    } else {
        format!("a theologian known for insights within the {tradition} tradition")
    }
}

/// One substitute interpretation for a passage within a tradition.
///
/// Prefers the catalog's precomputed interpretation for that
/// passage+tradition; otherwise a deterministic placeholder that still names
/// the passage, the tradition, and the representative voice.
pub fn interpretation_for_tradition(passage: &str, tradition: &str) -> Interpretation {
    if let Some(catalogued) = catalog::interpretation_for_tradition(passage, tradition) {
        return Interpretation {
            id: format!("sample-{}", catalogued.id),
            ..catalogued
        };
    }

    let theologian = catalog::representative_theologian(passage, tradition)
        .map(str::to_string)
        .unwrap_or_else(|| generic_theologian_descriptor(tradition));
    Interpretation {
        id: format!("offline-{}-{}", slug(tradition), slug(passage)),
        passage: passage.to_string(),
        summary: format!(
            "An interpretation of {passage} from the {tradition} tradition is not available right now. \
             Voices such as {theologian} within this tradition typically draw out its core themes of \
             God's character and the believer's response."
        ),
        theologian_id: None,
        theologian_name: Some(theologian),
        theologian_tradition: Some(tradition.to_string()),
        keywords: None,
    }
}

/// Substitute interpretation list: one entry per requested tradition, or
/// one per catalogued tradition when the filter is empty.
pub fn interpretations_for_passage(passage: &str, tradition_filters: &[String]) -> Vec<Interpretation> {
    let traditions = if tradition_filters.is_empty() {
        catalog::all_traditions()
    } else {
        tradition_filters.to_vec()
    };
    traditions
        .iter()
        .map(|tradition| interpretation_for_tradition(passage, tradition))
        .collect()
}

/// Substitute cross-tradition synthesis.
pub fn synthesized_interpretation(passage: &str, traditions: &[String]) -> String {
    let tradition_string = if traditions.is_empty() {
        "various major historical perspectives".to_string()
    } else {
        traditions.join(", ")
    };
    format!(
        "Synthesis for {passage} across {tradition_string}: this verse is generally understood to \
         emphasize core theological themes. Different traditions may highlight divine sovereignty, \
         human response, or the scope of salvation, but a common thread is the transformative power \
         of the scriptural message when read through these historical lenses."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_catalogued_interpretation() {
        let result = interpretation_for_tradition("John 3:16", "Lutheran");
        assert_eq!(result.theologian_name.as_deref(), Some("Martin Luther"));
        assert!(result.id.starts_with("sample-"));
    }

    #[test]
    fn test_placeholder_names_passage_and_tradition() {
        let result = interpretation_for_tradition("Obadiah 1:1", "Anglican");
        assert_eq!(result.passage, "Obadiah 1:1");
        assert_eq!(result.theologian_tradition.as_deref(), Some("Anglican"));
        assert!(result.summary.contains("Obadiah 1:1"));
        assert!(result.summary.contains("Anglican"));
    }

    #[test]
    fn test_unknown_tradition_uses_generic_descriptor() {
        let result = interpretation_for_tradition("John 3:16", "Coptic");
        assert!(result
            .theologian_name
            .as_deref()
            .unwrap()
            .contains("Coptic"));
    }

    #[test]
    fn test_empty_filter_covers_every_catalogued_tradition() {
        let results = interpretations_for_passage("John 3:16", &[]);
        assert_eq!(results.len(), catalog::all_traditions().len());
    }

    #[test]
    fn test_filtered_lookup_is_one_per_tradition() {
        let filters = vec!["Catholic".to_string(), "Lutheran".to_string()];
        let results = interpretations_for_passage("John 3:16", &filters);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].theologian_tradition.as_deref(), Some("Catholic"));
        assert_eq!(results[1].theologian_tradition.as_deref(), Some("Lutheran"));
    }
}
