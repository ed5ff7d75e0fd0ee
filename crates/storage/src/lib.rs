//! SQLite key-value persistence layer for GrowthPath.
//!
//! This crate stores each logical record (user profile, prayer requests,
//! journal entries, onboarding flag) as one whole JSON document in a single
//! `documents` table. Writes replace the entire document: last writer wins,
//! no merge. Timestamp fields are normalized to valid dates on read.
//!
//! # Example
//!
//! ```no_run
//! use storage::{profile, Storage};
//! use coach_core::{BibleKnowledgeLevel, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Storage::connect("sqlite:growthpath.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     let user = UserProfile::new(
//!         Some("Ana".to_string()),
//!         "Develop a consistent prayer life",
//!         BibleKnowledgeLevel::Beginner,
//!         "Exploring",
//!     );
//!     profile::complete_onboarding(store.pool(), &user).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod journal;
pub mod kv;
pub mod profile;

pub use error::{Result, StorageError};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Storage connection wrapper.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Default pool size for storage connections.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to storage: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run storage migrations.
    ///
    /// This should be called once after connecting to ensure the schema is
    /// up to date.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Storage migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) async fn test_store() -> Storage {
    let store = Storage::connect("sqlite::memory:").await.unwrap();
    store.migrate().await.unwrap();
    store
}
