//! Error types for dorado operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for dorado operations.
///
/// Provides detailed context about failures including malformed hex words,
/// dimension mismatches, and invalid pipeline configurations.
///
/// # Examples
///
/// ```
/// use dorado::error::DoradoError;
///
/// let err = DoradoError::MalformedHex {
///     input: "3f80".to_string(),
/// };
/// assert!(err.to_string().contains("3f80"));
/// ```
#[derive(Debug)]
pub enum DoradoError {
    /// Hex word is not exactly eight hexadecimal characters.
    MalformedHex {
        /// The offending input string
        input: String,
    },

    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid pipeline configuration value provided.
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (directory not writable, disk full, etc.).
    Io(std::io::Error),
}

impl fmt::Display for DoradoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoradoError::MalformedHex { input } => {
                write!(
                    f,
                    "Malformed hex word {input:?}: expected exactly 8 hexadecimal characters"
                )
            }
            DoradoError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            DoradoError::InvalidConfig {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid configuration: {param} = {value}, expected {constraint}"
                )
            }
            DoradoError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DoradoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DoradoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DoradoError {
    fn from(err: std::io::Error) -> Self {
        DoradoError::Io(err)
    }
}

impl DoradoError {
    /// Create a malformed hex error for the given input
    #[must_use]
    pub fn malformed_hex(input: &str) -> Self {
        Self::MalformedHex {
            input: input.to_string(),
        }
    }

    /// Create an invalid configuration error with descriptive context
    #[must_use]
    pub fn invalid_config(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for DoradoError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<DoradoError> for &str {
    fn eq(&self, other: &DoradoError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DoradoError>;
