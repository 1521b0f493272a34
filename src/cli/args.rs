//! CLI argument definitions using clap
//!
//! Commands:
//! - registrar serve [--config <path>] [--port <port>]
//! - registrar check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// registrar - A small student record-management HTTP service
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply if the file is absent)
        #[arg(long, default_value = "./registrar.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a configuration file and exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./registrar.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
