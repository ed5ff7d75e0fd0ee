//! Study-library types: scripture structure, theologians, interpretations,
//! community groups, and milestones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book of the Bible and its chapter count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleBook {
    pub name: String,
    pub chapters: u32,
}

/// A testament and its books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testament {
    pub name: String,
    pub books: Vec<BibleBook>,
}

/// A theologian in the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theologian {
    pub id: String,
    pub name: String,
    /// Tradition name; free-form to allow broader categories such as
    /// "Church Father".
    pub tradition: String,
    /// Era description, e.g. "Reformation (1483-1546 AD)".
    pub era: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// One interpretation of a passage. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub id: String,
    /// Passage reference in "Book Chapter:Verse" form.
    pub passage: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theologian_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theologian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theologian_tradition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// A community group in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members_count: u32,
    /// e.g. "Bible Study", "Support".
    pub focus_area: String,
    pub is_private: bool,
}

/// A spiritual growth milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiritualMilestone {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_date: Option<DateTime<Utc>>,
    /// 0-100 for milestones in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}
