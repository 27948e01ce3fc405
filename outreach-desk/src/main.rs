//! outreach-desk - Customer Outreach Desk
//!
//! Internal staff tool: load customer workbooks, rank customers by
//! priority, draft outreach letters, and record follow-ups. Serves a small
//! web UI plus a JSON API on one port; state lives in the root folder
//! (SQLite database and the bundled guide template).

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use outreach_desk::AppState;

#[derive(Parser, Debug)]
#[command(name = "outreach-desk", version, about = "Customer outreach desk")]
struct Cli {
    /// Root folder holding the database and guide template
    #[arg(long)]
    root_folder: Option<String>,

    /// Listen port (default 5731, or OUTREACH_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting outreach-desk (Customer Outreach Desk)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve root folder (CLI -> env -> TOML -> default) and create it
    let root_folder = outreach_common::config::resolve_root_folder(cli.root_folder.as_deref());
    outreach_common::config::ensure_root_folder(&root_folder)?;
    info!("Root folder: {}", root_folder.display());

    // Open or create the database
    let db_path = outreach_common::config::database_path(&root_folder);
    info!("Database: {}", db_path.display());
    let db_pool = outreach_common::db::init_database_pool(&db_path).await?;
    info!("Database connection established");

    // Create application state and router
    let state = AppState::new(db_pool, root_folder);
    let app = outreach_desk::build_router(state);

    // Start server
    let port = outreach_common::config::resolve_port(cli.port);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("Listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
