//! Serve command - run the local token server

use anyhow::{Context, Result};
use colored::Colorize;
use tokenvault_core::{bind_address, VaultPaths};
use tokenvault_server::{AppState, Database};
use tracing::info;

pub async fn run() -> Result<()> {
    info!("Starting TokenVault server v{}", env!("CARGO_PKG_VERSION"));

    let paths = VaultPaths::from_home().context("Failed to resolve storage location")?;
    let db_path = paths.database_path();
    info!("Data directory: {}", paths.data_dir().display());

    println!("{}", "Initializing database for server...".dimmed());
    let db = Database::open(&db_path)
        .await
        .context("Failed to initialize database")?;
    println!("Database stored at: {}", db_path.display().to_string().cyan());

    let addr = bind_address();
    println!(
        "{} {}",
        "Starting server on".green().bold(),
        format!("http://{}", addr).cyan()
    );

    tokenvault_server::serve(AppState::new(db), &addr).await
}
