//! Error types for four-pillar calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced by the calculation entry points.
///
/// Calendar collaborator failures are folded into [`CalculationError::InvalidDate`]
/// without carrying the collaborator's own error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalculationError {
    /// Civil hour outside `[0, 24)`.
    InvalidHour(u32),
    /// The date did not resolve in the calendar.
    InvalidDate,
}

impl Display for CalculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (expected 0-23)"),
            Self::InvalidDate => write!(f, "date does not resolve to a valid calendar date"),
        }
    }
}

impl Error for CalculationError {}
