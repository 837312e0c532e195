//! Truncated Leibniz series for π
//!
//! The alternating series `4 - 4/3 + 4/5 - 4/7 + ...` converges to π,
//! slowly: the partial sum after n terms is off by roughly 1/n. That
//! convergence rate is a property of the algorithm, not something this
//! module tries to improve.

/// Approximate π with the first `intervals` terms of the Leibniz series.
///
/// Terms are accumulated in natural order into a single f64 running
/// total, one addition per term. Each term is computed as
/// `(4 - 8*(i % 2)) / (2*i + 1)` rather than flipping a sign variable,
/// so every partial sum rounds identically across runs and platforms.
/// No compensated or pairwise summation.
///
/// A count of zero or less runs the loop zero times and returns `0.0`.
/// Callers treat that as a valid degenerate result, not an error; there
/// is no failure condition for any `i64` input.
pub fn approximate(intervals: i64) -> f64 {
    let mut sum: f64 = 0.0;
    for i in 0..intervals {
        sum += (4 - (i % 2) * 8) as f64 / (2 * i + 1) as f64;
    }
    sum
}
