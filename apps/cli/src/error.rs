//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse_amount("-5") ── ValidationError ──┐                              │
//! │  CliConfig::load()  ── ConfigError ──────┼──► CliError { code, message }│
//! │  stdout / JSON      ── io / serde ───────┘         │                    │
//! │                                                     ▼                    │
//! │                                  stderr: "error: Amount cannot be ..." │
//! │                                  exit code: ErrorCode::exit_code()     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clipboard failures are not here: copying is fire-and-forget and only
//! logged.

use serde::Serialize;
use std::fmt;
use wordify_core::ValidationError;

use crate::config::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// Interactive `--json` sessions print failures as:
/// ```json
/// {
///   "code": "INVALID_AMOUNT",
///   "message": "Amount cannot be negative"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Text did not parse, or parsed to a negative amount
    InvalidAmount,

    /// Configuration file or environment is broken
    Config,

    /// Writing output failed
    Internal,
}

impl ErrorCode {
    /// Process exit status for this failure.
    pub const fn exit_code(self) -> u8 {
        match self {
            ErrorCode::InvalidAmount => 1,
            ErrorCode::Config => 2,
            ErrorCode::Internal => 70,
        }
    }
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::new(ErrorCode::InvalidAmount, err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::Config, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Output failed: {}", err);
        CliError::internal(format!("Failed to write output: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON encoding failed: {}", err);
        CliError::internal("Failed to encode JSON output")
    }
}

/// Result type for commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_invalid_amount() {
        let err: CliError = ValidationError::Negative {
            field: "Amount".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
        assert_eq!(err.message, "Amount cannot be negative");
        assert_eq!(err.code.exit_code(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let err = CliError::new(ErrorCode::InvalidAmount, "Amount is required");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"code":"INVALID_AMOUNT","message":"Amount is required"}"#
        );
    }
}
