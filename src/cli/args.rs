//! CLI argument definitions using clap
//!
//! Commands:
//! - election init --config <path> [--seed]
//! - election start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Election API - candidates, parties and voters over HTTP
#[derive(Parser, Debug)]
#[command(name = "election")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and its tables
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./election.json")]
        config: PathBuf,

        /// Also load the sample parties, candidates and voters
        #[arg(long)]
        seed: bool,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./election.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
