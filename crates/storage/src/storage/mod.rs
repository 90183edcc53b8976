//! SQLite storage over an r2d2 connection pool.
//!
//! All methods are synchronous; `sqlite_async` lifts them onto the store
//! traits through `spawn_blocking`.

#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    reason = "column positions are tiny and fit i64"
)]

mod boards;
mod tasks;

use std::path::Path;

use kanban_core::{Task, TaskStatus};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use rusqlite::types::Type;

use crate::error::StorageError;
use crate::migrations;

pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Columns selected whenever a full task row is read.
pub(crate) const TASK_COLUMNS: &str = "id, title, description, status, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Cascade deletes only work when foreign keys are switched on for the connection.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA foreign_keys = ON;",
    )
}

pub(crate) fn row_to_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let status_str: String = row.get("status")?;
    let status = status_str.parse::<TaskStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
    })?;
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        status,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

impl Storage {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn new(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(path = %db_path.display(), pool_size, "SQLite storage initialized");
        Ok(Self { pool })
    }

    pub fn initialize_database(&self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        migrations::run_migrations(&conn)?;
        Ok(())
    }

    /// Database clock, read as UTC.
    pub fn ping(&self) -> Result<chrono::DateTime<chrono::Utc>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let now: String = conn.query_row("SELECT CURRENT_TIMESTAMP", [], |row| row.get(0))?;
        chrono::NaiveDateTime::parse_from_str(&now, "%Y-%m-%d %H:%M:%S")
            .map(|naive| naive.and_utc())
            .map_err(|e| StorageError::DataCorruption {
                context: format!("unexpected CURRENT_TIMESTAMP format: {now}"),
                source: Box::new(e),
            })
    }
}
