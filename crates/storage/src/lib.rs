//! Storage layer for the kanban board
//!
//! Three flat tables (boards, columns, tasks) behind async store traits.
//! SQLite is the local default; PostgreSQL is selected when a database URL
//! is configured.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod assembly;
mod backend;
pub mod error;
mod migrations;
mod pg_migrations;
mod pg_storage;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use pg_storage::PgStorage;
pub use storage::Storage;
