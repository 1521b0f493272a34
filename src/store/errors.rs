//! # Store Errors
//!
//! Error types for the store adapter boundary. Not-found is deliberately not
//! an error: `find_one` returns `Ok(None)` and `remove_all` returns a zero
//! count, because both are expected outcomes.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store adapter errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Insert rejected because a record with this netid already exists
    #[error("record with netid '{0}' already exists")]
    DuplicateNetId(String),

    /// An update targeted a filter that matched no record
    #[error("no record matched the update filter")]
    NoMatch,

    /// Backend failure (lock poisoning, I/O in a durable implementation)
    #[error("store internal error: {0}")]
    Internal(String),
}
