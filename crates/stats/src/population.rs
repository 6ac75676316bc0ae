//! Population container.
//!
//! A population is an ordered sequence of numeric observations. Insertion
//! order carries no meaning for the statistics, but it is preserved: the
//! calculator sorts a private working copy and never reorders the
//! population itself.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrimmedMeanError;
use crate::observation::Observation;

/// A population of numeric observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Population {
    observations: Vec<Observation>,
}

impl Population {
    /// Create a new population from observations.
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the population has no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations as a slice, in insertion order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Append an observation.
    pub fn push(&mut self, observation: impl Into<Observation>) {
        self.observations.push(observation.into());
    }

    /// Iterate over the observations.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Coerce every observation to `f64`, preserving insertion order.
    ///
    /// This is the working copy the calculator sorts and trims; the
    /// population itself is left untouched.
    pub fn normalized(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.as_f64()).collect()
    }
}

impl From<Vec<Observation>> for Population {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

impl FromIterator<Observation> for Population {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

impl FromStr for Population {
    type Err = TrimmedMeanError;

    /// Parse the comma- or whitespace-separated textual form, e.g.
    /// `"12, 7.25, 3"`. A token that is neither an integer nor a float
    /// fails, naming its position in the population.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut observations = Vec::new();
        let tokens = s
            .split([',', '\n', '\r', '\t', ' '])
            .map(str::trim)
            .filter(|token| !token.is_empty());

        for (index, token) in tokens.enumerate() {
            match Observation::from_token(token) {
                Some(observation) => observations.push(observation),
                None => {
                    return Err(TrimmedMeanError::UnsupportedValue {
                        index,
                        token: token.to_string(),
                    })
                }
            }
        }

        Ok(Self::new(observations))
    }
}

impl fmt::Display for Population {
    /// Comma-separated form, suitable for feeding to an external
    /// calculator for cross-checking.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, observation) in self.observations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{observation}")?;
        }
        Ok(())
    }
}
