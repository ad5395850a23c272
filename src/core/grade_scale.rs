//! Grade scale: letter grade token to grade-point mapping
//!
//! The scale is an immutable value injected through [`crate::core::GpaPolicy`]
//! rather than a module-level global, so tests and institutions can substitute
//! alternate scales.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable mapping from grade token to grade-point value on the 4.0 scale
///
/// Unknown tokens score 0.0 grade points. That is a deliberate lenient
/// default, not an error: an unrecognized grade still counts its credits,
/// it just earns nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeScale {
    points: BTreeMap<String, f64>,
}

impl GradeScale {
    /// The standard 4.0 scale used when no alternate scale is configured
    #[must_use]
    pub fn standard() -> Self {
        let pairs: [(&str, f64); 14] = [
            ("A+", 4.0),
            ("A", 4.0),
            ("A-", 3.7),
            ("B+", 3.3),
            ("B", 3.0),
            ("B-", 2.7),
            ("C+", 2.3),
            ("C", 2.0),
            ("C-", 1.7),
            ("D+", 1.3),
            ("D", 1.0),
            ("F", 0.0),
            ("RX", 0.0),
            ("-", 0.0),
        ];
        Self {
            points: pairs
                .into_iter()
                .map(|(token, value)| (token.to_string(), value))
                .collect(),
        }
    }

    /// Build a scale from token/value pairs (later duplicates win)
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            points: pairs.into_iter().collect(),
        }
    }

    /// Grade points for `grade`, or 0.0 for an unknown token
    #[must_use]
    pub fn points(&self, grade: &str) -> f64 {
        self.points.get(grade).copied().unwrap_or(0.0)
    }

    /// Whether `grade` is a known token on this scale
    #[must_use]
    pub fn contains(&self, grade: &str) -> bool {
        self.points.contains_key(grade)
    }

    /// Number of known grade tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the scale has no tokens at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::standard()
    }
}
