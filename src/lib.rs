//! registrar - A small student record-management HTTP service
//!
//! Create, fetch, list, delete, and bulk-normalize student records over
//! HTTP, backed by a pluggable document store.

pub mod api;
pub mod cli;
pub mod grading;
pub mod model;
pub mod observability;
pub mod store;
