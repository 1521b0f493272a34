//! # Store Adapter Contract
//!
//! The capability the handlers and the grading engine are written against.
//! Implementations own all physical storage concerns; the core only sees
//! records crossing this boundary. The trait is object-safe so a single
//! `Arc<dyn StudentStore>` handle can be threaded through the HTTP state.

use crate::model::Student;

use super::errors::StoreResult;
use super::filter::Filter;

/// Partial update applied by `update_one`.
///
/// Only the fields present are replaced. The normalization engine sets
/// `rating` exclusively; `netid` has no update path by design.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub rating: Option<String>,
}

impl StudentPatch {
    /// Patch that replaces only the rating.
    pub fn rating(value: impl Into<String>) -> Self {
        Self {
            rating: Some(value.into()),
        }
    }

    /// Apply this patch to a record in place.
    pub fn apply(&self, student: &mut Student) {
        if let Some(rating) = &self.rating {
            student.rating = rating.clone();
        }
    }
}

/// Persistence capability for student records
pub trait StudentStore: Send + Sync {
    /// Find the first record matching the filter, in storage order.
    ///
    /// Not matching anything is `Ok(None)`, never an error.
    fn find_one(&self, filter: &Filter) -> StoreResult<Option<Student>>;

    /// All records, in storage (insertion) order.
    fn find_all(&self) -> StoreResult<Vec<Student>>;

    /// Insert a record, rejecting a duplicate netid.
    ///
    /// The uniqueness check runs atomically with the insert, which is the
    /// storage-layer backstop for the handler's check-then-act sequence.
    fn insert(&self, student: Student) -> StoreResult<()>;

    /// Patch the first record matching the filter.
    fn update_one(&self, filter: &Filter, patch: &StudentPatch) -> StoreResult<()>;

    /// Remove every record matching the filter, returning the count removed.
    fn remove_all(&self, filter: &Filter) -> StoreResult<u64>;
}
