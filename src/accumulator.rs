//! Recursive aggregation helpers.
//!
//! [`recursive_sum`] recurses once per element, so very long inputs can
//! exhaust the thread's stack. That bound is accepted; use an iterator sum
//! where depth matters.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::record::RaceRecord;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Sums `values` as head plus the sum of the tail. An empty slice sums to zero.
pub fn recursive_sum(values: &[f64]) -> f64 {
    match values.split_first() {
        None => 0.0,
        Some((head, tail)) => head + recursive_sum(tail),
    }
}

/// Total points of `records` through [`recursive_sum`].
pub fn total_points(records: &[RaceRecord]) -> f64 {
    let points: Vec<f64> = records.iter().map(|r| r.points).collect();
    let total = recursive_sum(&points);
    debug!(records = records.len(), total, "summed points");
    total
}

/// `n!` computed recursively; `0!` and `1!` are 1.
///
/// Negative `n` and results beyond `u128` are rejected.
pub fn factorial(n: i64) -> CoreResult<u128> {
    if n < 0 {
        return Err(CoreError::invalid_input(format!(
            "factorial is undefined for negative input {}",
            n
        )));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(CoreError::invalid_input(format!(
            "factorial of {} overflows, maximum input is {}",
            n, MAX_FACTORIAL_INPUT
        )));
    }
    Ok(factorial_unchecked(n as u32))
}

fn factorial_unchecked(n: u32) -> u128 {
    if n <= 1 {
        return 1;
    }
    u128::from(n) * factorial_unchecked(n - 1)
}
