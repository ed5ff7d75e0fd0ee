//! Community groups and spiritual milestones.

use std::sync::LazyLock;

use chrono::{Duration, Utc};
use coach_core::{CommunityGroup, SpiritualMilestone};

static COMMUNITY_GROUPS: LazyLock<Vec<CommunityGroup>> = LazyLock::new(|| {
    let entry = |id: &str,
                 name: &str,
                 description: &str,
                 members_count: u32,
                 focus_area: &str,
                 is_private: bool| CommunityGroup {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        members_count,
        focus_area: focus_area.to_string(),
        is_private,
    };
    vec![
        entry(
            "cg1",
            "Men's Early Morning Bible Study",
            "Discussing the Gospels and practical application.",
            12,
            "Bible Study",
            false,
        ),
        entry(
            "cg2",
            "New Moms Support Group",
            "Sharing encouragement and wisdom for new mothers.",
            8,
            "Support",
            true,
        ),
        entry(
            "cg3",
            "Theology Deep Dive",
            "Exploring systematic theology topics.",
            25,
            "Theology",
            false,
        ),
    ]
});

static MILESTONES: LazyLock<Vec<SpiritualMilestone>> = LazyLock::new(|| {
    vec![
        SpiritualMilestone {
            id: "m1".to_string(),
            title: "Read 5 Bible Chapters".to_string(),
            description: "Completed reading 5 chapters of the Bible.".to_string(),
            achieved_date: Some(Utc::now() - Duration::days(5)),
            progress: Some(100),
        },
        SpiritualMilestone {
            id: "m2".to_string(),
            title: "First Journal Entry".to_string(),
            description: "Shared your first reflection.".to_string(),
            achieved_date: Some(Utc::now() - Duration::days(3)),
            progress: Some(100),
        },
        SpiritualMilestone {
            id: "m3".to_string(),
            title: "Consistent Quiet Time".to_string(),
            description: "7 days of prayer or study.".to_string(),
            achieved_date: None,
            progress: Some(60),
        },
        SpiritualMilestone {
            id: "m4".to_string(),
            title: "Explore a New Tradition".to_string(),
            description: "Learned about a different Christian perspective.".to_string(),
            achieved_date: None,
            progress: Some(20),
        },
    ]
});

/// The community group catalog.
pub fn community_groups() -> &'static [CommunityGroup] {
    &COMMUNITY_GROUPS
}

/// The milestone catalog.
pub fn milestones() -> &'static [SpiritualMilestone] {
    &MILESTONES
}
