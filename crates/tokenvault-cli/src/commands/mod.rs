//! Subcommand implementations

pub mod list;
pub mod serve;
pub mod setup_postman;

use colored::Colorize;

/// Printed when `tokenvault` runs without a subcommand.
pub fn print_usage() {
    println!("{}", "TokenVault CLI installed.".green().bold());
    println!("Run '{}' to start the server.", "tokenvault serve".cyan());
    println!(
        "Run '{}' to generate the Postman pre-request script.",
        "tokenvault setup-postman".cyan()
    );
}
