//! Error type shared by every preparation and scoring routine.
//!
//! Shape violations, nonsensical parameter combinations and undefined
//! ratios are all raised at the point they are detected; no routine
//! returns a partial result or mutates its inputs on failure.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Error type for dataset preparation, scoring and export.
#[derive(Debug)]
pub enum DatasetError {
    /// An input length or shape does not match what the operation requires.
    ShapeMismatch {
        /// What was being checked (e.g. "label sequence length")
        context: &'static str,
        /// Required size
        expected: usize,
        /// Size actually received
        actual: usize,
    },

    /// A parameter (or combination of parameters) has no sensible result.
    InvalidParameter(String),

    /// Recall is undefined because the reference labels contain no blocked day.
    NoPositives {
        /// Number of reference labels inspected
        total: usize,
    },

    /// A label sequence contains a value other than 0 or 1.
    InvalidLabel {
        /// Position of the first offending value
        index: usize,
        /// The offending value
        value: u8,
    },

    /// Filesystem failure while exporting or loading.
    Io(std::io::Error),

    /// Encoding/decoding failure (npy, JSON, TOML).
    Serialization(String),
}

impl DatasetError {
    /// Shorthand for [`DatasetError::InvalidParameter`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Shorthand for [`DatasetError::ShapeMismatch`].
    pub fn shape(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context,
            expected,
            actual,
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Shape mismatch in {}: expected {}, got {}",
                context, expected, actual
            ),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::NoPositives { total } => write!(
                f,
                "Recall is undefined: no blocked days among {} reference labels",
                total
            ),
            Self::InvalidLabel { index, value } => write!(
                f,
                "Label at index {} is {}, expected 0 or 1",
                index, value
            ),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
