//! CLI-level errors (wraps core errors)

use std::path::PathBuf;

use spar_core::SparError;
use thiserror::Error;

/// Top-level error type; these are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] SparError),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No valid tubes! Use format: 12,8 on each line.")]
    NoTubes,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Exit code for this error (sysexits.h values)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(SparError::ConfigError { .. }) => 78,
            CliError::Core(_) | CliError::NoTubes => 65,
            CliError::Io { .. } => 74,
            CliError::Json(_) => 70,
        }
    }
}
