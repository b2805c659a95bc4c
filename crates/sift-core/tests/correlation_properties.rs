//! Property tests: the correlation engine is a bounded, order-invariant
//! mean over any multiset of valid domain scores.

use proptest::prelude::*;
use sift_core::correlation::{correlate, EMPTY_CORRELATION_SCORE};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate a non-empty set of valid domain scores.
fn arb_scores() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..=100.0, 1..16)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// For any non-empty score set, the result is the mean rounded to two
    /// decimals.
    #[test]
    fn output_is_rounded_mean(scores in arb_scores()) {
        let n = scores.len() as f64;
        let expected = (scores.iter().sum::<f64>() / n * 100.0).round() / 100.0;
        prop_assert_eq!(correlate(&scores), expected);
    }

    /// The result always stays inside the score range.
    #[test]
    fn output_is_bounded(scores in arb_scores()) {
        let result = correlate(&scores);
        prop_assert!((0.0..=100.0).contains(&result));
    }

    /// Reordering the inputs never changes the result.
    #[test]
    fn output_is_permutation_invariant(scores in arb_scores(), rotation in 0usize..16) {
        let baseline = correlate(&scores);

        let mut reversed = scores.clone();
        reversed.reverse();
        prop_assert_eq!(correlate(&reversed), baseline);

        let mut rotated = scores.clone();
        let split = rotation % rotated.len();
        rotated.rotate_left(split);
        prop_assert_eq!(correlate(&rotated), baseline);
    }

    /// Duplicating every element shifts the count but not the mean.
    #[test]
    fn doubling_the_multiset_preserves_the_mean(scores in arb_scores()) {
        let mut doubled = scores.clone();
        doubled.extend_from_slice(&scores);
        prop_assert_eq!(correlate(&doubled), correlate(&scores));
    }
}

#[test]
fn empty_input_returns_the_documented_sentinel() {
    assert_eq!(correlate(&[]), EMPTY_CORRELATION_SCORE);
}
