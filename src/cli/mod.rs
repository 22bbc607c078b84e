//! Command-line interface, parsed with clap.

mod commands;

pub use commands::{cmd_check_db, cmd_init_config};

use clap::{Parser, Subcommand};

/// Team X portal backend
#[derive(Parser)]
#[command(name = "teamx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP API (default)
    Serve,

    /// Open a database connection, run a trivial query and close it
    CheckDb,

    /// Create default config file
    #[command(alias = "--init")]
    InitConfig,
}

impl Cli {
    #[must_use]
    pub fn selected(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}
