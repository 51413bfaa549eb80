//! Roster Storage
//!
//! `SQLite` persistence for the user resource.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `users` module owns its own queries
//! - **Injected Handle**: stores wrap a pool created by the caller; there is
//!   no global connection
//! - **Atomic Operations**: every write is a single statement committed
//!   before the call returns
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{create_pool, run_migrations, SqliteUserStore};
//! use roster_core::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://roster.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteUserStore::new(pool);
//! let users = store.get_all_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::SqliteUserStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Creates the `users` table if it does not exist. Safe to call on every
/// startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("sqlite pool ready");

    Ok(pool)
}

/// Open a store at `database_url`, creating the schema when missing
pub async fn open(database_url: &str) -> error::Result<SqliteUserStore> {
    let pool = create_pool(database_url)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
    run_migrations(&pool).await?;

    Ok(SqliteUserStore::new(pool))
}
