//! PostgreSQL schema.

use sqlx::PgPool;

/// Create the three tables and their indexes. Safe to call on every start.
pub(crate) async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS boards (
            id VARCHAR(255) PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS columns (
            id VARCHAR(255) PRIMARY KEY,
            board_id VARCHAR(255) NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
            title VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Tables created before columns were ordered lack this.
    sqlx::query("ALTER TABLE columns ADD COLUMN IF NOT EXISTS position INTEGER NOT NULL DEFAULT 0")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_columns_board ON columns (board_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id VARCHAR(255) PRIMARY KEY,
            column_id VARCHAR(255) NOT NULL REFERENCES columns(id) ON DELETE CASCADE,
            title VARCHAR(255) NOT NULL,
            description TEXT,
            status VARCHAR(50) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_column ON tasks (column_id)")
        .execute(pool)
        .await?;

    tracing::debug!("PostgreSQL schema ready");
    Ok(())
}
