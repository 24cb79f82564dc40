//! # Error Types
//!
//! Domain-specific error types for wordify-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wordify-core errors (this file)                                       │
//! │  └── ValidationError  - Amount input failures                          │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - What the terminal sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → stderr / JSON                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The formatters never return these. `format_english` and `format_chinese`
//! signal bad input with an empty string; errors only come out of the
//! constructors in [`crate::amount`] and [`crate::validation`].

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Amount validation errors.
///
/// ## User Workflow
/// ```text
/// User types "-5"
///      │
///      ▼
/// parse_amount("-5")
///      │
///      ▼
/// Negative { field: "Amount" }
///      │
///      ▼
/// Terminal shows: "Amount cannot be negative"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing was entered.
    #[error("{field} is required")]
    Required { field: String },

    /// Text does not look like a decimal number.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a valid number")]
    NotANumber { field: String },

    /// Value is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Whole part does not fit the supported range.
    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: u64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================
