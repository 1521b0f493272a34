//! CLI command implementations
//!
//! `serve` loads the HTTP config, builds the in-memory store, and runs the
//! axum server on a tokio runtime. The store handle is constructed here and
//! passed into the server explicitly — no global connection state.

use std::path::Path;
use std::sync::Arc;

use crate::api::{ApiServer, HttpConfig};
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> CliResult<HttpConfig> {
    if !path.exists() {
        return Ok(HttpConfig::default());
    }
    HttpConfig::load(path).map_err(|e| CliError::config_error(e.to_string()))
}

/// Start the HTTP server
fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let store = Arc::new(MemoryStore::new());
    let server = ApiServer::with_config(store, config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a configuration file and print the resolved bind address
fn check_config(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    println!("{}", config.socket_addr());
    Ok(())
}
