use std::path::Path;

use r2d2::{CustomizeConnection, Pool};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};

use super::KeyValueStore;
use crate::error::StorageError;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const DB_FILE_NAME: &str = "rihla.db";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS app_settings (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

/// Connection customizer that sets per-connection SQLite pragmas.
#[derive(Debug)]
struct SqlitePragmaCustomizer;

impl CustomizeConnection<rusqlite::Connection, rusqlite::Error> for SqlitePragmaCustomizer {
    fn on_acquire(&self, conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
        conn.execute_batch(
            "PRAGMA busy_timeout = 5000;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(())
    }
}

/// Settings table in a local SQLite file. Blocking calls run on the tokio blocking pool.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) `rihla.db` under `data_dir` and ensure the schema exists.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(data_dir)?;
        let db_path = data_dir.join(DB_FILE_NAME);

        tracing::info!(path = %db_path.display(), "Opening settings database");

        let manager = SqliteConnectionManager::file(&db_path);
        let pool = Pool::builder()
            .max_size(2)
            .connection_customizer(Box::new(SqlitePragmaCustomizer))
            .build(manager)?;

        {
            let conn = pool.get()?;
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
            conn.execute_batch(SCHEMA)?;
        }

        tracing::debug!("Settings database ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn get_setting(pool: &DbPool, key: &str) -> Result<Option<String>, StorageError> {
    let conn = pool.get()?;
    let value = conn
        .query_row(
            "SELECT value FROM app_settings WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

fn set_setting(pool: &DbPool, key: &str, value: &str) -> Result<(), StorageError> {
    let conn = pool.get()?;
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO app_settings (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
        params![key, value, now],
    )?;
    Ok(())
}

fn delete_setting(pool: &DbPool, key: &str) -> Result<bool, StorageError> {
    let conn = pool.get()?;
    let rows = conn.execute("DELETE FROM app_settings WHERE key = ?1", params![key])?;
    Ok(rows > 0)
}

#[async_trait::async_trait]
impl KeyValueStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let pool = self.pool.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || get_setting(&pool, &key)).await?
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let pool = self.pool.clone();
        let key = key.to_string();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || set_setting(&pool, &key, &value)).await?
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let pool = self.pool.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || delete_setting(&pool, &key)).await?
    }
}
