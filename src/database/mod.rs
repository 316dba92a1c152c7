//! SQLite Database Module
//!
//! Persistent lexicon store: confirmed entries and the search history that
//! feeds word-of-the-day.

mod lexicon;
mod migrations;
mod models;
mod search_history;
mod store;

pub use lexicon::LexiconOps;
pub use migrations::run_migrations;
pub use models::*;
pub use search_history::SearchHistoryOps;
pub use store::{LexiconStore, StoreError, StoreResult};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};

/// Default database file name inside the data directory.
pub const DATABASE_FILE: &str = "sollagarathi.db";

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    path: PathBuf,
}

impl Database {
    /// Open (or create) `sollagarathi.db` inside `data_dir`.
    pub async fn new(data_dir: &Path) -> Result<Self, sqlx::Error> {
        Self::open(&data_dir.join(DATABASE_FILE)).await
    }

    /// Open (or create) the database at an explicit path and run migrations.
    pub async fn open(db_path: &Path) -> Result<Self, sqlx::Error> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            path: db_path.to_path_buf(),
        };

        migrations::run_migrations(&db.pool).await?;

        Ok(db)
    }

    /// Get the underlying pool for direct queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get database file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
