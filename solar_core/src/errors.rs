//! # Error Types
//!
//! Structured error types for solar_core. Every calculation step returns a
//! [`CalcResult`], so a load that is genuinely zero can always be told apart
//! from a load that could not be computed.
//!
//! ## Example
//!
//! ```rust
//! use solar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_m: f64) -> CalcResult<()> {
//!     if spacing_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "column_spacing_m".to_string(),
//!             value: spacing_m.to_string(),
//!             reason: "Column spacing must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_spacing(2.5).is_ok());
//! assert!(validate_spacing(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for solar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, zero count, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Steel section not found in the catalog
    #[error("Section not found: {section_id}")]
    SectionNotFound { section_id: String },

    /// Calculation produced no usable value (non-finite result, empty catalog, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// A reference dataset violates its own invariants
    #[error("Invalid reference data: {table} - {reason}")]
    InvalidReferenceData { table: String, reason: String },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(section_id: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            section_id: section_id.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidReferenceData error
    pub fn invalid_reference(table: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidReferenceData {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::InvalidReferenceData { .. } => "INVALID_REFERENCE_DATA",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject a non-finite intermediate value produced by `calculation_type`.
pub(crate) fn ensure_finite(calculation_type: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::calculation_failed(
            calculation_type,
            format!("result is not a finite number ({})", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("tilt_angle_deg", "95", "Tilt must be within 0-90 degrees");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::section_not_found("C80").error_code(), "SECTION_NOT_FOUND");
        assert_eq!(
            CalcError::invalid_reference("cities", "empty").error_code(),
            "INVALID_REFERENCE_DATA"
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("wind_load", 1.5).unwrap(), 1.5);
        let err = ensure_finite("wind_load", f64::NAN).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(ensure_finite("wind_load", f64::INFINITY).is_err());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
