use anyhow::Result;
use clap::{Parser, Subcommand};
use kanban_core::{DEFAULT_HTTP_PORT, DatabaseConfig, KanbanConfig};
use kanban_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Kanban board server with drag-and-drop task moves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the tables if they do not exist
    InitDb,
    /// Connect and print the database server time
    CheckDb,
    /// Print a board as JSON
    Show {
        /// Defaults to the configured singleton board
        #[arg(short, long)]
        board_id: Option<String>,
    },
    /// Delete a board with its columns and tasks
    Reset {
        #[arg(short, long)]
        board_id: Option<String>,
    },
}

/// Create the parent directory of a SQLite database file.
pub(crate) fn ensure_db_dir(config: &DatabaseConfig) -> Result<()> {
    if let DatabaseConfig::Sqlite { path, .. } = config
        && let Some(parent) = path.parent()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) async fn open_backend(config: &KanbanConfig) -> Result<StorageBackend> {
    ensure_db_dir(&config.database)?;
    let backend = StorageBackend::open(&config.database).await?;
    tracing::debug!(kind = backend.kind(), "storage backend opened");
    Ok(backend)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = KanbanConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&config, port, &host).await,
        Commands::InitDb => commands::db::init(&config).await,
        Commands::CheckDb => commands::db::check(&config).await,
        Commands::Show { board_id } => {
            let id = board_id.unwrap_or_else(|| config.default_board_id.clone());
            commands::board::show(&config, &id).await
        },
        Commands::Reset { board_id } => {
            let id = board_id.unwrap_or_else(|| config.default_board_id.clone());
            commands::board::reset(&config, &id).await
        },
    }
}
