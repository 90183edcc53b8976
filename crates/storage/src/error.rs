//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, duplicate id,
//! transient connection trouble) instead of downcasting opaque boxes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Primary-key or unique constraint violation.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQLite statement failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[source] rusqlite::Error),

    /// SQLite connection pool exhausted or broken.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// PostgreSQL statement / connection / timeout failure.
    #[error("database error: {0}")]
    Postgres(#[source] sqlx::Error),

    /// A blocking storage task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(String),

    /// Row data could not be turned into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Postgres(e) => matches!(e, sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)),
            Self::Pool(_) => true,
            Self::Sqlite(rusqlite::Error::SqliteFailure(e, _)) => {
                matches!(e.code, rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
            },
            _ => false,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// `RowNotFound` and SQLSTATE 23505 get their own variants; everything else
/// is a plain database error.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Postgres(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Self::Duplicate(msg.clone().unwrap_or_else(|| e.to_string()))
            },
            _ => Self::Sqlite(err),
        }
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}
