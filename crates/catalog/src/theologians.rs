//! Theologian catalog and tradition groupings.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use coach_core::{stable_index, Theologian};

static THEOLOGIANS: LazyLock<Vec<Theologian>> = LazyLock::new(|| {
    let entry = |id: &str, name: &str, tradition: &str, era: &str, bio: &str| Theologian {
        id: id.to_string(),
        name: name.to_string(),
        tradition: tradition.to_string(),
        era: era.to_string(),
        bio: Some(bio.to_string()),
    };
    vec![
        entry(
            "t1",
            "Gregory of Nyssa",
            "Orthodox",
            "Early Church (c. 335 - c. 395 AD)",
            "One of the three Cappadocian Fathers, known for his significant contributions to Trinitarian theology, mystical thought, and Christian Platonism.",
        ),
        entry(
            "t2",
            "Thomas Aquinas",
            "Catholic",
            "Medieval (1225-1274 AD)",
            "Immensely influential philosopher, theologian, and jurist.",
        ),
        entry(
            "t3",
            "Martin Luther",
            "Lutheran",
            "Reformation (1483-1546 AD)",
            "A seminal figure in the Protestant Reformation.",
        ),
        entry(
            "t4",
            "John Calvin",
            "Protestant (Reformed)",
            "Reformation (1509-1564 AD)",
            "Influential French theologian and pastor during the Protestant Reformation.",
        ),
        entry(
            "t5",
            "John Wesley",
            "Protestant (Methodist)",
            "18th Century (1703-1791 AD)",
            "An Anglican cleric and theologian who, with his brother Charles and fellow cleric George Whitefield, founded Methodism.",
        ),
        entry(
            "t6",
            "John Chrysostom",
            "Orthodox",
            "Early Church (c. 347-407 AD)",
            "Archbishop of Constantinople, known for his preaching and public speaking, revered in Eastern Orthodoxy.",
        ),
        entry(
            "t7",
            "N.T. Wright",
            "Anglican",
            "Contemporary",
            "Leading New Testament scholar known for the New Perspective on Paul.",
        ),
    ]
});

// Tradition -> theologian names, grouped once at startup. BTreeMap keeps the
// tradition list sorted for deterministic iteration.
static TRADITION_THEOLOGIANS: LazyLock<BTreeMap<String, Vec<String>>> = LazyLock::new(|| {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for theologian in THEOLOGIANS.iter() {
        grouped
            .entry(theologian.tradition.clone())
            .or_default()
            .push(theologian.name.clone());
    }
    grouped
});

/// Every catalogued theologian.
pub fn theologians() -> &'static [Theologian] {
    &THEOLOGIANS
}

/// Look up a theologian by catalog id.
pub fn theologian_by_id(id: &str) -> Option<&'static Theologian> {
    THEOLOGIANS.iter().find(|theologian| theologian.id == id)
}

/// Theologian names associated with a tradition (case-insensitive).
pub fn theologians_for_tradition(tradition: &str) -> &'static [String] {
    TRADITION_THEOLOGIANS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tradition))
        .map(|(_, names)| names.as_slice())
        .unwrap_or(&[])
}

/// Every tradition known to the catalog, sorted and deduplicated.
pub fn all_traditions() -> Vec<String> {
    TRADITION_THEOLOGIANS.keys().cloned().collect()
}

/// Pick one representative theologian for a passage within a tradition.
///
/// Selection is by stable hash of passage + tradition, so the same lookup
/// always lands on the same name while different passages still vary the
/// voice. Returns `None` when the tradition has no catalogued members.
pub fn representative_theologian(passage: &str, tradition: &str) -> Option<&'static str> {
    let names = theologians_for_tradition(tradition);
    let index = stable_index(&format!("{passage}|{tradition}"), names.len())?;
    Some(names[index].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let luther = theologian_by_id("t3").unwrap();
        assert_eq!(luther.name, "Martin Luther");
        assert_eq!(luther.tradition, "Lutheran");
        assert!(theologian_by_id("t99").is_none());
    }

    #[test]
    fn test_grouping_covers_every_tradition() {
        let traditions = all_traditions();
        assert_eq!(traditions.len(), 6);
        assert!(traditions.contains(&"Orthodox".to_string()));
        assert!(traditions.contains(&"Protestant (Reformed)".to_string()));
        // Sorted output.
        let mut sorted = traditions.clone();
        sorted.sort();
        assert_eq!(traditions, sorted);
    }

    #[test]
    fn test_orthodox_has_two_members() {
        let names = theologians_for_tradition("Orthodox");
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Gregory of Nyssa".to_string()));
        assert!(names.contains(&"John Chrysostom".to_string()));
    }

    #[test]
    fn test_representative_selection_is_stable() {
        let first = representative_theologian("John 3:16", "Orthodox").unwrap();
        let second = representative_theologian("John 3:16", "Orthodox").unwrap();
        assert_eq!(first, second);

        assert!(representative_theologian("John 3:16", "Coptic").is_none());
    }
}
