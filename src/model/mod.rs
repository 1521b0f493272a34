//! # Data Model
//!
//! The student record and its derived rating.

pub mod student;

pub use student::{Rating, Student};
