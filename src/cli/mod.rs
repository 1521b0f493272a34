//! # CLI
//!
//! Command-line interface: argument parsing, config loading, and server
//! startup. `main.rs` calls [`run`] and nothing else.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
