//! Precomputed sample interpretations keyed by passage and theologian.

use std::sync::LazyLock;

use coach_core::Interpretation;

use crate::theologians::theologian_by_id;

static INTERPRETATIONS: LazyLock<Vec<Interpretation>> = LazyLock::new(|| {
    let entry = |id: &str, passage: &str, theologian_id: &str, summary: &str, keywords: &[&str]| {
        Interpretation {
            id: id.to_string(),
            passage: passage.to_string(),
            summary: summary.to_string(),
            theologian_id: Some(theologian_id.to_string()),
            theologian_name: None,
            theologian_tradition: None,
            keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
        }
    };
    vec![
        entry(
            "i1",
            "John 3:16",
            "t1",
            "Gregory of Nyssa emphasized God's immense love and the Incarnation as a path to theosis (deification) for humanity, where belief in Christ restores the divine image.",
            &["theosis", "divine love", "Incarnation", "image of God"],
        ),
        entry(
            "i2",
            "John 3:16",
            "t3",
            "Luther highlighted \"faith alone\" (sola fide) as the means of receiving this gift of eternal life. God's love is universal in offer, but effectual for believers.",
            &["faith alone", "universal offer", "justification"],
        ),
        entry(
            "i3",
            "John 3:16",
            "t5",
            "Wesley stressed God's universal love and prevenient grace enabling all to believe. Salvation is available to everyone who responds in faith.",
            &["universal love", "prevenient grace", "free will"],
        ),
        entry(
            "i4",
            "Romans 8:28",
            "t4",
            "Calvin saw Romans 8:28 as a promise for the elect, that God orchestrates all things for their ultimate good according to His sovereign plan and purpose.",
            &["sovereignty", "providence", "elect", "God's purpose"],
        ),
        entry(
            "i5",
            "Romans 8:28",
            "t1",
            "Gregory of Nyssa might interpret this through divine providence, seeing all events, even adversities, as potentially guiding the soul towards God and spiritual perfection (epektasis).",
            &["providence", "epektasis", "spiritual perfection", "suffering"],
        ),
        entry(
            "i6",
            "John 1:1",
            "t6",
            "Chrysostom emphasized the eternal pre-existence and divinity of the Word (Logos), highlighting that the Word was both \"with God\" (distinct person) and \"was God\" (same divine essence).",
            &["Logos", "divinity of Christ", "Trinity", "pre-existence"],
        ),
        entry(
            "i7",
            "John 1:1",
            "t7",
            "N.T. Wright often connects John 1:1 with Genesis 1:1, seeing the Word as God's agent of creation and new creation, fulfilling Israel's story and revealing God's wisdom.",
            &["new creation", "wisdom", "Israel's story", "Genesis"],
        ),
        entry(
            "i8",
            "Genesis 1:1",
            "t1",
            "Gregory of Nyssa affirmed God's goodness in creation, often emphasizing the intelligible (noetic) creation as a primary act, with the material world following. He explored the concept of humanity created in God's image.",
            &["creation", "divine goodness", "intelligible creation", "Imago Dei"],
        ),
        entry(
            "i9",
            "Genesis 1:26",
            "t4",
            "Calvin affirmed God's direct creation of humans in His image as described in Genesis 1:26, emphasizing human dignity and purpose. He related this to the concept of Imago Dei.",
            &["Imago Dei", "human dignity", "purposeful design", "creation"],
        ),
        entry(
            "i10",
            "John 1:2",
            "t1",
            "Gregory of Nyssa would strongly affirm John 1:2, underscoring the eternal pre-existence and distinct personhood of the Word (Logos) within the one divine essence, crucial to Cappadocian Trinitarian doctrine.",
            &["Trinity", "Logos", "co-eternity", "Cappadocian Fathers"],
        ),
        entry(
            "i11",
            "John 1:3",
            "t2",
            "Aquinas, drawing on Aristotelian philosophy, would interpret John 1:3 as highlighting Christ the Word as the efficient cause of all creation, through whom all things derive their being.",
            &["creation", "efficient cause", "Logos", "being"],
        ),
        entry(
            "i12",
            "John 1:4",
            "t4",
            "Calvin would emphasize that in Christ (the Word) is life and this life is the true spiritual light for humanity, a light that sin has obscured but not extinguished.",
            &["life in Christ", "spiritual light", "sin", "revelation"],
        ),
        entry(
            "i13",
            "John 1:5",
            "t5",
            "Wesley might focus on John 1:5 in terms of God's prevenient grace, the light shining in the darkness, offering illumination to all, even if the darkness (sinful humanity) does not fully comprehend or overcome it without response.",
            &["prevenient grace", "light and darkness", "human response", "sin"],
        ),
    ]
});

/// Resolve the theologian name and tradition onto a catalog entry.
fn with_attribution(interpretation: &Interpretation) -> Interpretation {
    let mut resolved = interpretation.clone();
    if let Some(theologian) = interpretation
        .theologian_id
        .as_deref()
        .and_then(theologian_by_id)
    {
        resolved.theologian_name = Some(theologian.name.clone());
        resolved.theologian_tradition = Some(theologian.tradition.clone());
    }
    resolved
}

/// Every catalogued interpretation of a passage (case-insensitive), with
/// theologian attribution resolved.
pub fn interpretations_for_passage(passage: &str) -> Vec<Interpretation> {
    INTERPRETATIONS
        .iter()
        .filter(|interpretation| interpretation.passage.eq_ignore_ascii_case(passage))
        .map(with_attribution)
        .collect()
}

/// The catalogued interpretation of a passage from a given tradition, if any.
pub fn interpretation_for_tradition(passage: &str, tradition: &str) -> Option<Interpretation> {
    interpretations_for_passage(passage)
        .into_iter()
        .find(|interpretation| {
            interpretation
                .theologian_tradition
                .as_deref()
                .is_some_and(|catalogued| catalogued.eq_ignore_ascii_case(tradition))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passage_lookup_resolves_attribution() {
        let results = interpretations_for_passage("john 3:16");
        assert_eq!(results.len(), 3);
        assert!(results
            .iter()
            .any(|entry| entry.theologian_name.as_deref() == Some("Martin Luther")));
        assert!(results
            .iter()
            .all(|entry| entry.theologian_tradition.is_some()));
    }

    #[test]
    fn test_tradition_lookup() {
        let lutheran = interpretation_for_tradition("John 3:16", "Lutheran").unwrap();
        assert_eq!(lutheran.theologian_name.as_deref(), Some("Martin Luther"));

        assert!(interpretation_for_tradition("John 3:16", "Anglican").is_none());
        assert!(interpretation_for_tradition("Obadiah 1:1", "Lutheran").is_none());
    }
}
