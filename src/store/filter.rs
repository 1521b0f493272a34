//! # Filter Expressions
//!
//! The two comparisons the service actually issues against the store:
//! equality (lookups by arbitrary field, the netid uniqueness check, the
//! engine's per-record update target) and less-than-or-equal (the bulk
//! delete's year threshold).

use serde_json::Value;

use crate::model::Student;

/// Comparison operators supported by the store contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Field equals the operand
    Eq,

    /// Field is numerically less than or equal to the operand
    Lte,
}

/// A single-field filter expression
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Wire name of the field to compare
    pub field: String,

    pub operator: FilterOperator,

    /// Operand to compare against
    pub value: Value,
}

impl Filter {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Equality filter
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOperator::Eq, value)
    }

    /// Numeric less-than-or-equal filter
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOperator::Lte, value)
    }

    /// Check whether a record matches this filter.
    ///
    /// Unknown field names match nothing. `Lte` only compares integers; a
    /// non-numeric operand or field never matches.
    pub fn matches(&self, student: &Student) -> bool {
        let field_value = match student.field(&self.field) {
            Some(v) => v,
            None => return false,
        };

        match self.operator {
            FilterOperator::Eq => field_value == self.value,
            FilterOperator::Lte => match (field_value.as_i64(), self.value.as_i64()) {
                (Some(field_num), Some(operand)) => field_num <= operand,
                _ => false,
            },
        }
    }

    /// Coerce a query-string value into a typed operand.
    ///
    /// Integer-looking text becomes a number so `year=2015` matches the
    /// numeric field; everything else stays a string. This is the documented
    /// coercion for the read-by-filter endpoint.
    pub fn coerce(raw: &str) -> Value {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Number(n.into());
        }
        Value::String(raw.to_string())
    }
}
