//! # Store Adapter
//!
//! The persistence capability the handlers and the grading engine depend on:
//! filtered find, find-all, insert, update, and bulk remove over student
//! records. The contract lives in [`adapter`]; [`memory`] provides the
//! in-process implementation used by the server.

pub mod adapter;
pub mod errors;
pub mod filter;
pub mod memory;

pub use adapter::{StudentPatch, StudentStore};
pub use errors::{StoreError, StoreResult};
pub use filter::{Filter, FilterOperator};
pub use memory::MemoryStore;
