//! Error types for direction and vector conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseFloatError;

/// Errors from building or converting directions and cartesian vectors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// Input sequence had the wrong number of components.
    InvalidLength {
        expected: &'static str,
        found: usize,
    },
    /// A batch row differs in length from the first row.
    RaggedBatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Text input could not be read as a number.
    Parse(String),
    /// Zero-length cartesian vector has no direction.
    /// `index` is the batch row, or `None` for a single vector.
    DegenerateVector { index: Option<usize> },
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "invalid length: expected {expected} components, got {found}")
            }
            Self::RaggedBatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged batch: row {row} has {found} components, expected {expected}"
            ),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::DegenerateVector { index: Some(i) } => {
                write!(f, "degenerate zero-length vector at row {i}")
            }
            Self::DegenerateVector { index: None } => write!(f, "degenerate zero-length vector"),
        }
    }
}

impl Error for FrameError {}

impl From<ParseFloatError> for FrameError {
    fn from(e: ParseFloatError) -> Self {
        Self::Parse(e.to_string())
    }
}
