//! # Request Handlers
//!
//! The five student operations. Each handler translates an already-parsed
//! request into store adapter calls and renders a plain-text response. The
//! rendering core is synchronous and takes the store as an explicit
//! argument, so tests run against an isolated store with no server.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};

use crate::grading;
use crate::model::Student;
use crate::observability::Logger;
use crate::store::{Filter, StudentStore};

use super::errors::{ApiError, ApiResult};
use super::server::AppState;

/// Message rendered when a per-key lookup matches nothing.
const NO_USER_FOUND: &str = "No user found\n";

/// Label prefixed to every record in a listing.
const RECORD_LABEL: &str = "Student\n";

// ==================
// Axum entry points
// ==================

/// GET /Student/getstudent — read by arbitrary filter keys
pub async fn get_student(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> ApiResult<String> {
    render_lookup(state.store.as_ref(), &params)
}

/// GET /Student/listall — read all
pub async fn list_students(State(state): State<AppState>) -> ApiResult<String> {
    render_listing(state.store.as_ref())
}

/// POST /Student — create
pub async fn create_student(State(state): State<AppState>, body: String) -> ApiResult<String> {
    create(state.store.as_ref(), &body)
}

/// DELETE /Student/{year} — bulk remove by year threshold
pub async fn delete_students(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> ApiResult<String> {
    delete_by_year(state.store.as_ref(), &year)
}

/// PATCH /Student — grade normalization
pub async fn normalize_grades(State(state): State<AppState>) -> ApiResult<String> {
    normalize(state.store.as_ref())
}

// ==================
// Rendering core
// ==================

/// For each query key independently, look up at most one matching record.
///
/// Keys are iterated in sorted order — the `BTreeMap` makes the otherwise
/// unspecified ordering deterministic. Unknown field names simply match
/// nothing and render the not-found message.
pub fn render_lookup(
    store: &dyn StudentStore,
    params: &BTreeMap<String, String>,
) -> ApiResult<String> {
    let mut out = String::new();

    for (key, raw_value) in params {
        let filter = Filter::eq(key.clone(), Filter::coerce(raw_value));
        match store.find_one(&filter)? {
            Some(student) => {
                out.push_str(&to_pretty_json(&student)?);
                out.push('\n');
            }
            None => out.push_str(NO_USER_FOUND),
        }
    }

    Ok(out)
}

/// Render every stored record in storage order, each prefixed with a label.
///
/// An empty store renders an empty body, not an error.
pub fn render_listing(store: &dyn StudentStore) -> ApiResult<String> {
    let students = store.find_all()?;

    let mut out = String::new();
    for student in &students {
        out.push_str(RECORD_LABEL);
        out.push_str(&to_pretty_json(student)?);
        out.push('\n');
    }

    Ok(out)
}

/// Decode and insert a new record, rejecting a duplicate netid.
///
/// Check-then-act: the lookup here gives the friendly duplicate response,
/// while the store's insert-time uniqueness check is the authoritative
/// guard against a concurrent insert of the same netid.
pub fn create(store: &dyn StudentStore, body: &str) -> ApiResult<String> {
    let student: Student =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let lookup = Filter::eq("netid", serde_json::Value::String(student.net_id.clone()));
    if store.find_one(&lookup)?.is_some() {
        Logger::warn("DUPLICATE_NETID", &[("netid", &student.net_id)]);
        return Err(ApiError::Duplicate);
    }

    let net_id = student.net_id.clone();
    store.insert(student)?;
    Logger::info("STUDENT_INSERTED", &[("netid", &net_id)]);

    Ok("Added user\n".to_string())
}

/// Remove every record with `year <= threshold` and report the count.
pub fn delete_by_year(store: &dyn StudentStore, raw_year: &str) -> ApiResult<String> {
    let threshold: i64 = raw_year
        .parse()
        .map_err(|_| ApiError::InvalidYear(raw_year.to_string()))?;

    let removed = store.remove_all(&Filter::lte("year", threshold.into()))?;
    Logger::info(
        "STUDENTS_REMOVED",
        &[
            ("count", &removed.to_string()),
            ("year_lte", &threshold.to_string()),
        ],
    );

    Ok(format!("{} student[s] removed!\n", removed))
}

/// Run the normalization engine, then render the post-update listing.
pub fn normalize(store: &dyn StudentStore) -> ApiResult<String> {
    match grading::normalize(store)? {
        grading::Outcome::NoStudents => Ok("No students in database.\n".to_string()),
        grading::Outcome::Normalized { average, updated } => {
            Logger::info(
                "GRADES_NORMALIZED",
                &[
                    ("average", &average.to_string()),
                    ("updated", &updated.to_string()),
                ],
            );

            let mut out = format!("Average was {}.\nUpdated information:\n", average);
            out.push_str(&render_listing(store)?);
            Ok(out)
        }
    }
}

fn to_pretty_json(student: &Student) -> ApiResult<String> {
    serde_json::to_string_pretty(student).map_err(|e| ApiError::Store(e.to_string()))
}
