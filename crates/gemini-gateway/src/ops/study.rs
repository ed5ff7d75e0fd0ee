//! Passage interpretation and chapter text operations.

use coach_core::Interpretation;
use futures::future::join_all;

use crate::gateway::Gateway;
use crate::parse;
use crate::prompts;

fn slug(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .to_lowercase()
}

impl Gateway {
    /// Interpretations of a passage, one per tradition.
    ///
    /// With an empty filter, every tradition known to the catalog is
    /// queried. One model call is issued per tradition, concurrently; each
    /// call adopts the voice of that tradition's representative theologian
    /// (chosen by stable hash of passage + tradition). A failed call
    /// degrades only its own tradition's entry.
    pub async fn interpretations_for_passage(
        &self,
        passage: &str,
        tradition_filters: &[String],
    ) -> Vec<Interpretation> {
        let traditions: Vec<String> = if tradition_filters.is_empty() {
            catalog::all_traditions()
        } else {
            tradition_filters.to_vec()
        };

        let lookups = traditions
            .iter()
            .map(|tradition| self.interpretation_for_tradition(passage, tradition));
        join_all(lookups).await
    }

    async fn interpretation_for_tradition(
        &self,
        passage: &str,
        tradition: &str,
    ) -> Interpretation {
        let theologian = catalog::representative_theologian(passage, tradition)
            .map(str::to_string)
            .unwrap_or_else(|| {
                if tradition.eq_ignore_ascii_case("Christian") {
                    "a prominent Christian theologian known for insightful biblical commentary"
                        .to_string()
                } else {
                    format!("a theologian known for insights within the {tradition} tradition")
                }
            });

        let id = format!("ai-{}-{}", slug(tradition), slug(passage));
        let passage_owned = passage.to_string();
        let tradition_owned = tradition.to_string();
        let theologian_for_parse = theologian.clone();

        self.attempt(
            "interpretations_for_passage",
            prompts::interpretation(&theologian, passage),
            move |raw| {
                let summary = parse::non_empty_text(raw)?;
                Ok(Interpretation {
                    id,
                    passage: passage_owned,
                    summary,
                    theologian_id: None,
                    theologian_name: Some(theologian_for_parse),
                    theologian_tradition: Some(tradition_owned),
                    keywords: None,
                })
            },
            || fallback::interpretation_for_tradition(passage, tradition),
        )
        .await
    }

    /// One synthesized, cross-tradition interpretation of a passage.
    pub async fn synthesized_interpretation(
        &self,
        passage: &str,
        traditions: &[String],
    ) -> String {
        self.attempt(
            "synthesized_interpretation",
            prompts::synthesis(passage, traditions),
            parse::non_empty_text,
            || fallback::synthesized_interpretation(passage, traditions),
        )
        .await
    }

    /// Full chapter text as ordered verse lines, each prefixed with its
    /// verse number. Zero usable verses counts as a failure and falls back
    /// to the catalog sample merged with placeholder lines.
    pub async fn chapter_text(&self, book: &str, chapter: u32) -> Vec<String> {
        self.attempt(
            "chapter_text",
            prompts::chapter(book, chapter),
            |raw| parse::parse_verse_lines(&raw),
            || fallback::chapter_text(book, chapter),
        )
        .await
    }
}
