//! TokenVault CLI
//!
//! Stores one token per project and serves it to API tools over a local
//! HTTP endpoint.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokenvault")]
#[command(author, version, about = "A developer tool for token management", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the local server
    Serve,

    /// Generate the Postman automation script with interactive config
    #[command(name = "setup-postman")]
    SetupPostman,

    /// List stored projects with masked tokens
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "tokenvault=debug,tokenvault_server=debug,tower_http=debug"
    } else {
        "tokenvault=info,tokenvault_server=info"
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    debug!("Starting TokenVault CLI");

    let result = match cli.command {
        None => {
            commands::print_usage();
            Ok(())
        }
        Some(Commands::Serve) => commands::serve::run().await,
        Some(Commands::SetupPostman) => commands::setup_postman::run(),
        Some(Commands::List) => commands::list::run().await,
    };

    if let Err(e) = result {
        error!("Command failed: {:#}", e);
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
