//! Shared constants for the kanban service.

/// Identifier of the singleton board when `DEFAULT_BOARD_ID` is not set.
pub const DEFAULT_BOARD_ID: &str = "default-board";

/// Title given to the singleton board when it is created lazily.
pub const DEFAULT_BOARD_TITLE: &str = "My Kanban Board";

/// Columns created alongside every new board, in display order.
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// SQLite connection pool size when `KANBAN_DB_POOL_SIZE` is not set.
pub const DEFAULT_SQLITE_POOL_SIZE: u32 = 8;

/// Port the HTTP server listens on by default.
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Longest board, column or task title the schema accepts (`VARCHAR(255)`).
pub const MAX_TITLE_LEN: usize = 255;
