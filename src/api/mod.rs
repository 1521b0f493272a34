//! # HTTP API
//!
//! Axum routes for the five student operations, wire-compatible with the
//! paths and plain-text responses existing clients already use.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod server;

pub use config::HttpConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{ApiServer, AppState};
