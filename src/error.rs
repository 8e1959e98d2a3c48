//! Error types for the Trafo transformer calculator.
//!
//! This module provides a unified error type [`TrafoError`] that covers
//! input validation, the bench-test analyses, and CLI file handling.
//! The dimensioning stages themselves never fail once their input has been
//! validated, so every error a caller sees is raised before any computation
//! starts.

use thiserror::Error;

/// Result type alias using [`TrafoError`].
pub type Result<T> = std::result::Result<T, TrafoError>;

/// Unified error type for all Trafo operations.
#[derive(Error, Debug)]
pub enum TrafoError {
    // ============ Validation Errors ============
    /// A required input field is absent
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    /// Topology string is not one of the four known variants
    #[error("Invalid transformer type '{value}'; expected one of: {}", crate::input::Topology::LITERALS.join(", "))]
    InvalidTopology { value: String },

    /// Voltage count does not match the topology
    #[error("Expected {expected} {side} voltage(s) for this transformer type, got {got}")]
    InvalidVoltageList {
        side: &'static str,
        expected: usize,
        got: usize,
    },

    /// A voltage entry is not a positive number within range
    #[error("Invalid {side} voltage '{value}': must be a number greater than zero and at most {} V", crate::input::MAX_VOLTAGE)]
    InvalidVoltage { side: &'static str, value: String },

    /// Rated power is not positive or exceeds the supported range
    #[error("Power must be greater than zero and at most {} VA (got {value})", crate::input::MAX_POWER)]
    InvalidPower { value: f64 },

    /// Lamination family is not Standard or Long
    #[error("Invalid lamination type '{value}'; expected 'Padronizada' or 'Comprida'")]
    InvalidLamination { value: String },

    /// Frequency is zero or negative
    #[error("Frequency must be greater than zero (got {value} Hz)")]
    InvalidFrequency { value: i64 },

    // ============ Analysis Errors ============
    /// Open/short-circuit test readings are unusable
    #[error("Invalid test data: {message}")]
    InvalidTestData { message: String },

    /// Magnetization curve is unusable
    #[error("Invalid magnetization curve: {message}")]
    InvalidCurve { message: String },

    /// Load description for the regulation calculation is unusable
    #[error("Invalid load: {message}")]
    InvalidLoad { message: String },

    // ============ I/O Errors ============
    /// Error reading an input file
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing an output file
    #[error("Failed to write file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl TrafoError {
    /// Create a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid test data error
    pub fn test_data(message: impl Into<String>) -> Self {
        Self::InvalidTestData {
            message: message.into(),
        }
    }

    /// Create an invalid curve error
    pub fn curve(message: impl Into<String>) -> Self {
        Self::InvalidCurve {
            message: message.into(),
        }
    }

    /// Create an invalid load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::InvalidLoad {
            message: message.into(),
        }
    }

    /// Whether this error was raised while validating a transformer description.
    ///
    /// Validation errors are recoverable by supplying corrected input; no
    /// partial result exists when one is returned.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidTopology { .. }
                | Self::InvalidVoltageList { .. }
                | Self::InvalidVoltage { .. }
                | Self::InvalidPower { .. }
                | Self::InvalidLamination { .. }
                | Self::InvalidFrequency { .. }
        )
    }
}
