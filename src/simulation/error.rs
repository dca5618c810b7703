//! Error types and handling
//!
//! This module contains error types and error handling for the simulator.

use thiserror::Error;

/// Errors that can occur during account simulation
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Requested password length is below the accepted minimum
    #[error("Password length must be at least {minimum}, got {length}")]
    InvalidLength {
        /// The rejected length
        length: usize,
        /// Smallest accepted length
        minimum: usize,
    },

    /// Requested batch size exceeds the per-run limit
    #[error("Refusing to generate {requested} accounts: limit is {maximum} per run")]
    RequestTooLarge {
        /// The rejected batch size
        requested: usize,
        /// The configured per-run limit
        maximum: usize,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Account generation failed
    #[error("Account generation failed: {0}")]
    GenerationError(String),

    /// Export failed
    #[error("Export failed: {0}")]
    ExportError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<String> for SimulatorError {
    fn from(s: String) -> Self {
        SimulatorError::GenerationError(s)
    }
}

impl From<&str> for SimulatorError {
    fn from(s: &str) -> Self {
        SimulatorError::GenerationError(s.to_string())
    }
}

impl From<anyhow::Error> for SimulatorError {
    fn from(error: anyhow::Error) -> Self {
        SimulatorError::GenerationError(error.to_string())
    }
}

impl SimulatorError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an account generation error
    pub fn generation_error(msg: impl Into<String>) -> Self {
        Self::GenerationError(msg.into())
    }

    /// Create an export error
    pub fn export_error(msg: impl Into<String>) -> Self {
        Self::ExportError(msg.into())
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulatorError::InvalidLength { .. } => false,
            SimulatorError::RequestTooLarge { .. } => false,
            SimulatorError::ConfigurationError(_) => false,
            SimulatorError::GenerationError(_) => true,
            SimulatorError::ExportError(_) => true,
            SimulatorError::IoError(_) => true,
            SimulatorError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulatorError::InvalidLength { .. } => "Password Policy",
            SimulatorError::RequestTooLarge { .. } => "Batch Limit",
            SimulatorError::ConfigurationError(_) => "Configuration",
            SimulatorError::GenerationError(_) => "Generation",
            SimulatorError::ExportError(_) => "Export",
            SimulatorError::IoError(_) => "IO",
            SimulatorError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulator operations
pub type SimulatorResult<T> = Result<T, SimulatorError>;
