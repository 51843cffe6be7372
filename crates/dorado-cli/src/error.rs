//! Error types for dorado-cli.

use std::process::ExitCode;

use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Configuration rejected before the pipeline ran
    #[error("{0}")]
    InvalidConfig(String),

    /// IO error while persisting vector files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other dorado library error
    #[error("Dorado error: {0}")]
    Dorado(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidConfig(_) => ExitCode::from(2),
            Self::Io(_) => ExitCode::from(7),
            Self::Dorado(_) => ExitCode::from(1),
        }
    }
}

impl From<dorado::DoradoError> for CliError {
    fn from(e: dorado::DoradoError) -> Self {
        match e {
            dorado::DoradoError::Io(io) => Self::Io(io),
            e @ dorado::DoradoError::InvalidConfig { .. } => Self::InvalidConfig(e.to_string()),
            e => Self::Dorado(e.to_string()),
        }
    }
}
