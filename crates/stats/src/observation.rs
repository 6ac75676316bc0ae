use core::fmt;

use serde::{Deserialize, Serialize};

/// A single numeric observation in a population.
///
/// Populations mix integer and floating-point values in one container.
/// `Observation` keeps that distinction at the boundary (parsing, export)
/// and collapses to `f64` via [`as_f64`](Self::as_f64) before any
/// statistics run. Serialization is untagged, so JSON numbers round-trip
/// without a wrapper object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Observation {
    Int(i64),
    Float(f64),
}

impl Observation {
    /// Collapse to the common floating-point domain.
    #[inline(always)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Parse a single textual token. Integer syntax wins; a token that
    /// parses as neither an integer nor a float returns `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Ok(v) = token.parse::<i64>() {
            return Some(Self::Int(v));
        }
        token.parse::<f64>().ok().map(Self::Float)
    }

    /// Return true if this observation is an integer.
    #[inline(always)]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Return true if this observation is a float.
    #[inline(always)]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl From<i64> for Observation {
    #[inline(always)]
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Observation {
    #[inline(always)]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
