//! Prayer request and journal entry collections.

use coach_core::{JournalEntry, PrayerRequest};
use sqlx::SqlitePool;

use crate::kv;
use crate::Result;

/// Document key for the prayer request collection.
pub const PRAYER_REQUESTS_KEY: &str = "prayerRequests_growthpath";

/// Document key for the journal entry collection.
pub const JOURNAL_ENTRIES_KEY: &str = "journalEntries_growthpath";

/// Load prayer requests, newest first.
///
/// Timestamps are normalized during decoding, so records written with
/// invalid dates come back stamped now rather than failing the read.
pub async fn load_prayer_requests(pool: &SqlitePool) -> Result<Vec<PrayerRequest>> {
    let mut requests: Vec<PrayerRequest> = kv::get_document(pool, PRAYER_REQUESTS_KEY)
        .await?
        .unwrap_or_default();
    requests.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(requests)
}

/// Replace the prayer request collection.
pub async fn save_prayer_requests(pool: &SqlitePool, requests: &[PrayerRequest]) -> Result<()> {
    kv::put_document(pool, PRAYER_REQUESTS_KEY, &requests).await
}

/// Load journal entries, newest first.
pub async fn load_journal_entries(pool: &SqlitePool) -> Result<Vec<JournalEntry>> {
    let mut entries: Vec<JournalEntry> = kv::get_document(pool, JOURNAL_ENTRIES_KEY)
        .await?
        .unwrap_or_default();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(entries)
}

/// Replace the journal entry collection.
pub async fn save_journal_entries(pool: &SqlitePool, entries: &[JournalEntry]) -> Result<()> {
    kv::put_document(pool, JOURNAL_ENTRIES_KEY, &entries).await
}

/// Populate an empty store with the catalog's starter content.
///
/// Only writes when the corresponding document is missing entirely; a user
/// who deleted every entry keeps an empty list.
pub async fn seed_journal_if_empty(pool: &SqlitePool) -> Result<()> {
    if kv::get_raw(pool, PRAYER_REQUESTS_KEY).await?.is_none() {
        tracing::debug!("Seeding starter prayer requests");
        save_prayer_requests(pool, &catalog::sample_prayer_requests()).await?;
    }
    if kv::get_raw(pool, JOURNAL_ENTRIES_KEY).await?.is_none() {
        tracing::debug!("Seeding starter journal entries");
        save_journal_entries(pool, &catalog::sample_journal_entries()).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_store;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_collections_come_back_newest_first() {
        let store = test_store().await;

        let old = PrayerRequest {
            id: "pr-old".to_string(),
            text: "An older request.".to_string(),
            timestamp: Utc::now() - Duration::days(3),
            is_answered: true,
            shared_with_community: false,
        };
        let new = PrayerRequest::new("A fresh request.", false);
        save_prayer_requests(store.pool(), &[old, new]).await.unwrap();

        let loaded = load_prayer_requests(store.pool()).await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "A fresh request.");
        assert_eq!(loaded[1].id, "pr-old");
    }

    #[tokio::test]
    async fn test_unparsable_timestamp_normalizes_instead_of_crashing() {
        let store = test_store().await;

        kv::put_raw(
            store.pool(),
            JOURNAL_ENTRIES_KEY,
            r#"[{"id": "je-bad", "title": "Old entry", "text": "Carried over.",
                 "timestamp": "not-a-date"}]"#,
        )
        .await
        .unwrap();

        let entries = load_journal_entries(store.pool()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].timestamp.timestamp() > 0);
    }

    #[tokio::test]
    async fn test_seed_only_fills_missing_documents() {
        let store = test_store().await;

        // Explicitly emptied collection stays empty.
        save_journal_entries(store.pool(), &[]).await.unwrap();
        seed_journal_if_empty(store.pool()).await.unwrap();

        assert!(load_journal_entries(store.pool()).await.unwrap().is_empty());
        let prayers = load_prayer_requests(store.pool()).await.unwrap();
        assert_eq!(prayers.len(), 2);

        // Second run does not duplicate.
        seed_journal_if_empty(store.pool()).await.unwrap();
        assert_eq!(load_prayer_requests(store.pool()).await.unwrap().len(), 2);
    }
}
