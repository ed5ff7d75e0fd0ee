//! Static reference data for GrowthPath.
//!
//! Everything in this crate is compiled in: the Bible book structure, a
//! small catalog of theologians and precomputed interpretations, a handful
//! of transcribed sample chapters, community groups, milestones, and seed
//! journal content. The gateway uses it to validate answers (e.g. group
//! IDs) and the fallback resolver uses it to stand in for the model.

mod bible;
mod chapters;
mod groups;
mod interpretations;
mod seeds;
mod theologians;

pub use bible::{
    books_for_testament, chapters_for_book, testaments, verses_for_chapter, VERSES_PER_CHAPTER,
};
pub use chapters::sample_chapter;
pub use groups::{community_groups, milestones};
pub use interpretations::{interpretation_for_tradition, interpretations_for_passage};
pub use seeds::{sample_journal_entries, sample_prayer_requests};
pub use theologians::{
    all_traditions, representative_theologian, theologian_by_id, theologians,
    theologians_for_tradition,
};
