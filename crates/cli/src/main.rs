//! SNKRS CLI - catalog and credential management tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate the embedded catalog
//! snkrs-cli catalog check
//!
//! # Print the catalog as JSON
//! snkrs-cli catalog dump
//!
//! # Hash a password for the user directory
//! snkrs-cli hash-password demo123
//! ```
//!
//! # Commands
//!
//! - `catalog check` - Validate catalog invariants and cross-references
//! - `catalog dump` - Print the catalog as pretty JSON
//! - `hash-password` - Print an argon2 PHC hash for a password

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "snkrs-cli")]
#[command(author, version, about = "SNKRS CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the embedded catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Hash a password for the user directory
    HashPassword {
        /// The password to hash
        password: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Validate catalog invariants
    Check,
    /// Print the catalog as JSON
    Dump,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Check => commands::catalog::check()?,
            CatalogAction::Dump => commands::catalog::dump()?,
        },
        Commands::HashPassword { password } => commands::password::hash(&password)?,
    }
    Ok(())
}
