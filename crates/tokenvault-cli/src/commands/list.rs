//! List command - show stored projects

use anyhow::{Context, Result};
use colored::Colorize;
use tokenvault_core::VaultPaths;
use tokenvault_server::Database;

pub async fn run() -> Result<()> {
    let paths = VaultPaths::from_home().context("Failed to resolve storage location")?;
    let db = Database::open(&paths.database_path())
        .await
        .context("Failed to open database")?;

    let records = db.list_tokens().await.context("Failed to list tokens")?;
    db.close().await;

    println!("{}", "🔑 Stored tokens".blue().bold());
    println!();

    if records.is_empty() {
        println!("   (No tokens stored)");
        println!();
        println!(
            "   POST {{\"project\", \"token\"}} to {} while '{}' is running.",
            "/store".cyan(),
            "tokenvault serve".cyan()
        );
        return Ok(());
    }

    for record in &records {
        println!(
            "   {} {}",
            record.project_name.cyan(),
            record.masked_value().dimmed()
        );
        println!(
            "       Updated: {}",
            record.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    Ok(())
}
