//! # Student Record
//!
//! The single entity type managed by the service. Wire keys are lowercase
//! and must stay exactly as written for compatibility with existing clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single student record.
///
/// `rating` is a derived field: the normalization engine is the only part of
/// the system that recomputes it. A create request stores whatever the client
/// supplied, including values outside `A`/`B`/`C`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier. Immutable once stored.
    #[serde(rename = "netid")]
    pub net_id: String,

    pub name: String,

    pub major: String,

    /// Admission/graduation year.
    pub year: i64,

    /// Numeric score.
    pub grade: i64,

    /// One of "A", "B", "C", or "" when never classified.
    #[serde(default)]
    pub rating: String,
}

impl Student {
    /// Look up a field by its wire name.
    ///
    /// Returns `None` for names outside the schema, which makes filters on
    /// unknown fields match nothing.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "netid" => Some(Value::String(self.net_id.clone())),
            "name" => Some(Value::String(self.name.clone())),
            "major" => Some(Value::String(self.major.clone())),
            "year" => Some(Value::Number(self.year.into())),
            "grade" => Some(Value::Number(self.grade.into())),
            "rating" => Some(Value::String(self.rating.clone())),
            _ => None,
        }
    }
}

/// A rating the normalization engine can assign.
///
/// Records below every band keep whatever rating they already had, so stored
/// ratings are not restricted to these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    A,
    B,
    C,
}

impl Rating {
    /// The wire representation stored in [`Student::rating`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
        }
    }
}
