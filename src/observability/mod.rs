//! # Observability
//!
//! Structured JSON logging. One line per event, synchronous, deterministic
//! key order. No metrics or tracing layers — logs are the only output.

pub mod logger;

pub use logger::{Logger, Severity};
