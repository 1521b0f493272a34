//! # Rating Bands
//!
//! Three disjoint half-open bands around the class average, evaluated in
//! priority order. Grades below every band get no rating at all — the
//! record keeps whatever rating it already had. The gap below
//! `average - 20` is intentional and must not be closed with a fourth band.

use crate::model::Rating;

/// Classify a grade against the class average.
///
/// - `grade >= average + 10` is an `A`
/// - `average - 10 <= grade < average + 10` is a `B`
/// - `average - 20 <= grade < average - 10` is a `C`
/// - anything lower is unclassified (`None`)
pub fn classify(grade: i64, average: i64) -> Option<Rating> {
    if grade >= average + 10 {
        Some(Rating::A)
    } else if grade >= average - 10 {
        Some(Rating::B)
    } else if grade >= average - 20 {
        Some(Rating::C)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_around_average_90() {
        assert_eq!(classify(100, 90), Some(Rating::A));
        assert_eq!(classify(85, 90), Some(Rating::B));
        assert_eq!(classify(75, 90), Some(Rating::C));
        assert_eq!(classify(65, 90), None);
    }

    #[test]
    fn test_band_edges_are_half_open() {
        let average = 90;

        // A starts exactly at average + 10
        assert_eq!(classify(100, average), Some(Rating::A));
        assert_eq!(classify(99, average), Some(Rating::B));

        // B covers [average - 10, average + 10)
        assert_eq!(classify(80, average), Some(Rating::B));
        assert_eq!(classify(79, average), Some(Rating::C));

        // C covers [average - 20, average - 10)
        assert_eq!(classify(70, average), Some(Rating::C));
        assert_eq!(classify(69, average), None);
    }

    #[test]
    fn test_grade_equal_to_average_is_b() {
        assert_eq!(classify(90, 90), Some(Rating::B));
    }

    #[test]
    fn test_gap_below_bands_is_preserved() {
        // No fourth band: everything under average - 20 stays unclassified.
        assert_eq!(classify(0, 90), None);
        assert_eq!(classify(-50, 90), None);
    }
}
