//! # Grade Normalization
//!
//! The one genuinely algorithmic piece of the service: compute the class
//! average and reclassify every record's rating in a single pass.

pub mod banding;
pub mod engine;

pub use banding::classify;
pub use engine::{normalize, Outcome};
