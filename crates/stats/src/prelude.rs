//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use poptrim_stats::prelude::*;
//!
//! let population: Population = "1, 2, 3, 4, 5".parse().unwrap();
//! let result = trimmed_mean(&population, TrimSpec::Symmetric(0.0)).unwrap();
//! assert_eq!(result, 3.0);
//! ```

pub use crate::errors::TrimmedMeanError;
pub use crate::mean::{mean, trimmed_mean};
pub use crate::observation::Observation;
pub use crate::population::Population;
pub use crate::trim::TrimSpec;
