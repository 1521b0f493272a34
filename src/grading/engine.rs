//! # Normalization Engine
//!
//! Bulk update: fetch every record, compute the truncating class average,
//! then reclassify each record against that one precomputed average. Updates
//! are applied one record at a time through the store adapter; the first
//! failure aborts the remaining pass and already-applied updates stay. That
//! partial application is the accepted failure mode — no rollback.

use serde_json::Value;

use crate::store::{Filter, StoreResult, StudentPatch, StudentStore};

use super::banding::classify;

/// Result of one normalization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store was empty; nothing was computed or written.
    NoStudents,

    /// Ratings were recomputed against `average`.
    Normalized {
        /// Truncating integer average of all grades.
        average: i64,
        /// Number of records whose rating was rewritten.
        updated: usize,
    },
}

/// Run one normalization pass against the store.
pub fn normalize(store: &dyn StudentStore) -> StoreResult<Outcome> {
    let students = store.find_all()?;

    if students.is_empty() {
        return Ok(Outcome::NoStudents);
    }

    // Truncating integer division: sum 181 over 2 records is 90, not 90.5.
    let sum: i64 = students.iter().map(|s| s.grade).sum();
    let average = sum / students.len() as i64;

    let mut updated = 0;
    for student in &students {
        // Records below every band keep their existing rating.
        let Some(rating) = classify(student.grade, average) else {
            continue;
        };

        store.update_one(
            &Filter::eq("netid", Value::String(student.net_id.clone())),
            &StudentPatch::rating(rating.as_str()),
        )?;
        updated += 1;
    }

    Ok(Outcome::Normalized { average, updated })
}
