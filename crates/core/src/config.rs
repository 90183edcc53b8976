//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::{
    DEFAULT_BOARD_ID, DEFAULT_SQLITE_POOL_SIZE, env_flag, env_non_empty, env_parse_with_default,
};

/// Where board data is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Postgres { url: String },
    Sqlite { path: PathBuf, pool_size: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanConfig {
    /// Id of the singleton board served by `GET /api/board`.
    pub default_board_id: String,
    pub database: DatabaseConfig,
    /// Attach the underlying failure text to 500 responses.
    pub expose_error_details: bool,
}

impl KanbanConfig {
    /// Reads `DEFAULT_BOARD_ID`, `DATABASE_URL`, `KANBAN_DB_PATH`,
    /// `KANBAN_DB_POOL_SIZE` and `KANBAN_ERROR_DETAILS`.
    pub fn from_env() -> Self {
        let default_board_id =
            env_non_empty("DEFAULT_BOARD_ID").unwrap_or_else(|| DEFAULT_BOARD_ID.to_owned());
        let database = match env_non_empty("DATABASE_URL") {
            Some(url) => DatabaseConfig::Postgres { url },
            None => DatabaseConfig::Sqlite {
                path: env_non_empty("KANBAN_DB_PATH")
                    .map_or_else(default_sqlite_path, PathBuf::from),
                pool_size: env_parse_with_default("KANBAN_DB_POOL_SIZE", DEFAULT_SQLITE_POOL_SIZE),
            },
        };
        Self {
            default_board_id,
            database,
            expose_error_details: env_flag("KANBAN_ERROR_DETAILS", true),
        }
    }
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            default_board_id: DEFAULT_BOARD_ID.to_owned(),
            database: DatabaseConfig::Sqlite {
                path: default_sqlite_path(),
                pool_size: DEFAULT_SQLITE_POOL_SIZE,
            },
            expose_error_details: true,
        }
    }
}

/// `<data_local_dir>/kanban/kanban.db`, or `./kanban/kanban.db` when the
/// platform has no data directory.
pub fn default_sqlite_path() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("kanban").join("kanban.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_sqlite_and_default_board() {
        let config = KanbanConfig::default();
        assert_eq!(config.default_board_id, "default-board");
        assert!(config.expose_error_details);
        match config.database {
            DatabaseConfig::Sqlite { path, pool_size } => {
                assert!(path.ends_with("kanban/kanban.db"));
                assert_eq!(pool_size, DEFAULT_SQLITE_POOL_SIZE);
            },
            DatabaseConfig::Postgres { .. } => panic!("expected sqlite"),
        }
    }

    // The only test in this crate that touches DEFAULT_BOARD_ID.
    #[test]
    fn from_env_reads_board_id() {
        unsafe { std::env::set_var("DEFAULT_BOARD_ID", "sprint-7") };
        assert_eq!(KanbanConfig::from_env().default_board_id, "sprint-7");
        unsafe { std::env::set_var("DEFAULT_BOARD_ID", "  ") };
        assert_eq!(KanbanConfig::from_env().default_board_id, "default-board");
        unsafe { std::env::remove_var("DEFAULT_BOARD_ID") };
    }
}
