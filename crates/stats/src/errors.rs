use thiserror::Error;

/// Error type for trimmed-mean calculations.
///
/// Every failure is deterministic for a given input and carries enough
/// context to diagnose without re-running the calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrimmedMeanError {
    /// The variadic call boundary received the wrong number of fractions.
    #[error("expected one or two trim fractions, got {given}")]
    InvalidTrimArity { given: usize },

    /// A trim fraction is negative or at least 0.5.
    #[error("invalid {side} trim fraction: {value} (must be in [0.0, 0.5))")]
    InvalidTrimFraction { side: &'static str, value: f64 },

    /// The combined trim would discard the entire population.
    #[error(
        "trimming {lower_count} low and {upper_count} high values empties a population of {len}"
    )]
    TrimExceedsPopulation {
        lower_count: usize,
        upper_count: usize,
        len: usize,
    },

    /// The population has no elements.
    #[error("population is empty")]
    EmptyPopulation,

    /// A population element is not a recognized numeric value.
    #[error("value at position {index} is not numeric: '{token}'")]
    UnsupportedValue { index: usize, token: String },

    /// No values remained after trimming.
    #[error("no values remain after trimming")]
    EmptyAfterTrim,
}
