//! CLI module for the election API
//!
//! Provides command-line interface for:
//! - init: Create the database and its tables, optionally seeding them
//! - start: Open the database and serve HTTP until shutdown

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run_command, start};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command).await
}
