//! Whole-document key-value operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::Result;

/// Read a raw document value.
pub async fn get_raw(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let record: Option<(String,)> = sqlx::query_as(
        r#"
        SELECT value
        FROM documents
        WHERE key = ?
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(record.map(|(value,)| value))
}

/// Write a raw document value, replacing whatever was there.
pub async fn put_raw(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO documents (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = datetime('now')
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// Read and decode a JSON document.
pub async fn get_document<T: DeserializeOwned>(pool: &SqlitePool, key: &str) -> Result<Option<T>> {
    match get_raw(pool, key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON document, replacing whatever was there.
pub async fn put_document<T: Serialize>(pool: &SqlitePool, key: &str, document: &T) -> Result<()> {
    let raw = serde_json::to_string(document)?;
    put_raw(pool, key, &raw).await
}

/// Delete a document. Returns true if one existed.
pub async fn delete(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM documents
        WHERE key = ?
        "#,
    )
    .bind(key)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_store;

    #[tokio::test]
    async fn test_get_missing_document() {
        let store = test_store().await;
        let value: Option<Vec<String>> = get_document(store.pool(), "nothing").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_whole_document() {
        let store = test_store().await;

        put_document(store.pool(), "list", &vec!["a", "b"]).await.unwrap();
        put_document(store.pool(), "list", &vec!["c"]).await.unwrap();

        let value: Vec<String> = get_document(store.pool(), "list").await.unwrap().unwrap();
        assert_eq!(value, vec!["c"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = test_store().await;

        put_document(store.pool(), "flag", &true).await.unwrap();
        assert!(delete(store.pool(), "flag").await.unwrap());
        assert!(!delete(store.pool(), "flag").await.unwrap());
    }
}
