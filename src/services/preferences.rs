use async_trait::async_trait;
use chrono::Utc;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ClockResult;
use crate::utils::logging::{log_store_error, log_store_operation};

/// Session-scoped timezone preferences.
///
/// The store does not validate timezones; callers check the catalog first.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Stored timezone for the session, if any.
    async fn get(&self, session_id: &str) -> ClockResult<Option<String>>;

    /// Replaces the session's timezone.
    async fn set(&self, session_id: &str, timezone: &str) -> ClockResult<()>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> ClockResult<()>;

    /// Short name used in logs and health output.
    fn backend(&self) -> &'static str;
}

/// Process-local store; preferences vanish on restart.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, session_id: &str) -> ClockResult<Option<String>> {
        Ok(self.entries.read().await.get(session_id).cloned())
    }

    async fn set(&self, session_id: &str, timezone: &str) -> ClockResult<()> {
        self.entries
            .write()
            .await
            .insert(session_id.to_string(), timezone.to_string());
        log_store_operation("SET", self.backend(), Some(session_id));
        Ok(())
    }

    async fn ping(&self) -> ClockResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// SQLite-backed store, one row per session.
#[derive(Clone)]
pub struct SqlitePreferenceStore {
    pub pool: SqlitePool,
}

impl SqlitePreferenceStore {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            info!("Creating database {}", database_url);
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePool::connect(database_url).await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn get(&self, session_id: &str) -> ClockResult<Option<String>> {
        log_store_operation("SELECT", "session_preferences", Some(session_id));
        let timezone = sqlx::query_scalar::<_, String>(
            "SELECT timezone FROM session_preferences WHERE session_id = ?",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log_store_error("SELECT", "session_preferences", &e.to_string());
            e
        })?;

        Ok(timezone)
    }

    async fn set(&self, session_id: &str, timezone: &str) -> ClockResult<()> {
        log_store_operation("UPSERT", "session_preferences", Some(session_id));
        sqlx::query(
            r#"
            INSERT INTO session_preferences (session_id, timezone, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(session_id) DO UPDATE SET
                timezone = excluded.timezone,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(session_id)
        .bind(timezone)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log_store_error("UPSERT", "session_preferences", &e.to_string());
            e
        })?;

        Ok(())
    }

    async fn ping(&self) -> ClockResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (SqlitePreferenceStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let store = SqlitePreferenceStore::new(&db_url)
            .await
            .expect("Failed to create test database");
        store.run_migrations().await.expect("Failed to run migrations");

        (store, temp_dir)
    }

    #[test]
    fn test_memory_store_roundtrip() {
        tokio_test::block_on(async {
            let store = InMemoryPreferenceStore::new();
            assert_eq!(store.get("a").await.unwrap(), None);

            store.set("a", "Europe/Paris").await.unwrap();
            store.set("b", "Asia/Tokyo").await.unwrap();
            assert_eq!(store.get("a").await.unwrap().as_deref(), Some("Europe/Paris"));
            assert_eq!(store.get("b").await.unwrap().as_deref(), Some("Asia/Tokyo"));
        });
    }

    #[tokio::test]
    async fn test_sqlite_store_upsert() {
        let (store, _temp_dir) = create_test_store().await;

        assert_eq!(store.get("session-1").await.unwrap(), None);

        store.set("session-1", "America/New_York").await.unwrap();
        assert_eq!(
            store.get("session-1").await.unwrap().as_deref(),
            Some("America/New_York")
        );

        store.set("session-1", "Europe/Berlin").await.unwrap();
        assert_eq!(
            store.get("session-1").await.unwrap().as_deref(),
            Some("Europe/Berlin")
        );
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_sqlite_store_survives_reconnect() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let store = SqlitePreferenceStore::new(&db_url).await.unwrap();
        store.run_migrations().await.unwrap();
        store.set("s", "Australia/Sydney").await.unwrap();
        store.pool.close().await;

        let reopened = SqlitePreferenceStore::new(&db_url).await.unwrap();
        reopened.run_migrations().await.unwrap();
        assert_eq!(reopened.get("s").await.unwrap().as_deref(), Some("Australia/Sydney"));
    }
}
