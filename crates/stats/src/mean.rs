//! The trimmed-mean calculator.
//!
//! A trimmed mean is the arithmetic mean of a sample after a fraction of
//! the smallest and largest values has been discarded, which makes it far
//! less sensitive to outliers than the plain mean.

use std::cmp::Ordering;

use crate::errors::TrimmedMeanError;
use crate::population::Population;
use crate::trim::TrimSpec;

/// Calculate the arithmetic mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the trimmed mean of a population.
///
/// The population is normalized to `f64`, sorted ascending on a private
/// working copy, the first `floor(n * lower)` and last `floor(n * upper)`
/// values are discarded, and the mean of the retained slice is returned.
/// The retained values are summed in ascending order, so the result does
/// not depend on the caller's input order.
///
/// # Arguments
///
/// * `population` - The population to analyze (never mutated)
/// * `spec` - Trim fractions for the low and high ends, each in `[0.0, 0.5)`
///
/// # Returns
///
/// The mean of the retained values, or a [`TrimmedMeanError`] describing
/// the first validation failure.
///
/// # Examples
///
/// ```
/// use poptrim_stats::{trimmed_mean, Population, TrimSpec};
///
/// let population: Population = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10".parse().unwrap();
///
/// // 10% from each end drops 1 and 10, leaving 2..=9.
/// let symmetric = trimmed_mean(&population, TrimSpec::Symmetric(0.1)).unwrap();
/// assert_eq!(symmetric, 5.5);
///
/// // 10% low / 20% high drops 1, 9 and 10, leaving 2..=8.
/// let spec = TrimSpec::Asymmetric { lower: 0.1, upper: 0.2 };
/// assert_eq!(trimmed_mean(&population, spec).unwrap(), 5.0);
/// ```
pub fn trimmed_mean(population: &Population, spec: TrimSpec) -> Result<f64, TrimmedMeanError> {
    let (lower, upper) = spec.validate()?;
    let n = population.len();

    // Combined ratios must leave at least one value. The per-side range
    // check already bounds the sum below 1.0, but the contract is checked
    // on both forms.
    if lower + upper >= 1.0 {
        let (lower_count, upper_count) = spec.counts(n);
        return Err(TrimmedMeanError::TrimExceedsPopulation {
            lower_count,
            upper_count,
            len: n,
        });
    }

    let mut values = population.normalized();
    if values.is_empty() {
        return Err(TrimmedMeanError::EmptyPopulation);
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let (start, end) = retained_bounds(n, spec)?;
    let retained = &values[start..end];
    if retained.is_empty() {
        return Err(TrimmedMeanError::EmptyAfterTrim);
    }

    Ok(mean(retained))
}

/// Bounds of the retained slice within the sorted working copy.
///
/// Floor rounding is re-verified against the actual counts here: the raw
/// ratio check alone does not bound the discard at small `n`.
fn retained_bounds(n: usize, spec: TrimSpec) -> Result<(usize, usize), TrimmedMeanError> {
    let (lower_count, upper_count) = spec.counts(n);
    if lower_count + upper_count >= n {
        return Err(TrimmedMeanError::TrimExceedsPopulation {
            lower_count,
            upper_count,
            len: n,
        });
    }
    Ok((lower_count, n - upper_count))
}
