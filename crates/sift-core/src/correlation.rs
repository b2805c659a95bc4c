//! Correlation engine: variable-arity reduction of domain scores into one
//! bounded risk value.
//!
//! This is a pure function of the input multiset. It depends only on the
//! values and their count, never on order, and it cannot fail: callers
//! pre-validate every score into `[0, 100]` via `DomainScore`.

/// Score returned when no domain produced a usable value.
///
/// Policy, not a divide-by-zero guard: an input-free analysis is a
/// legitimate degenerate request and yields the floor of the risk range.
pub const EMPTY_CORRELATION_SCORE: f64 = 0.0;

/// Reduce zero-or-more domain scores to a single risk value in `[0, 100]`.
///
/// Computes the arithmetic mean, rounded to two decimals with
/// round-half-away-from-zero (`f64::round` semantics). An empty slice
/// returns [`EMPTY_CORRELATION_SCORE`].
pub fn correlate(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return EMPTY_CORRELATION_SCORE;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    round_to_cents(mean)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
