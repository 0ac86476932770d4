//! # Error Types
//!
//! Structured error types for spar_core. Every variant carries enough
//! context for a front end to point the user at the offending value.
//!
//! "No tube passes" is deliberately absent here: it is a valid outcome
//! reported as [`RankedReport::recommendation`](crate::calculations::RankedReport)
//! being `None`.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::errors::{SparError, SparResult};
//!
//! fn validate_span(span_m: f64) -> SparResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(SparError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spar_core operations
pub type SparResult<T> = Result<T, SparError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SparError {
    /// A scalar input is non-positive or not a finite number
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A tube geometry cannot produce a meaningful section.
    ///
    /// Diameters are kept as text so `inf` and `NaN` survive a JSON round trip.
    #[error("Invalid geometry {outer_mm} x {inner_mm} mm: {reason}")]
    InvalidGeometry {
        outer_mm: String,
        inner_mm: String,
        reason: String,
    },

    /// No candidate geometry left to rank
    #[error("No candidates: at least one valid tube geometry is required")]
    NoCandidates,

    /// Settings file could not be read or parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },
}

impl SparError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SparError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(outer_mm: f64, inner_mm: f64, reason: impl Into<String>) -> Self {
        SparError::InvalidGeometry {
            outer_mm: outer_mm.to_string(),
            inner_mm: inner_mm.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SparError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SparError::InvalidInput { .. } => "INVALID_INPUT",
            SparError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            SparError::NoCandidates => "NO_CANDIDATES",
            SparError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}

/// Reject anything that is not a strictly positive, finite number.
pub(crate) fn require_positive(field: &str, value: f64) -> SparResult<()> {
    if !value.is_finite() {
        return Err(SparError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(SparError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}
