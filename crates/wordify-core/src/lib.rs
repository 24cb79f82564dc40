//! # wordify-core: Cheque Amounts In Words
//!
//! Pure functions that spell out a monetary amount the way it is written on
//! a cheque, in two registers:
//!
//! - English long-form words:
//!   `One Thousand Two Hundred Thirty Four Dollars and Fifty Six Cents Only`
//! - Traditional Chinese financial numerals (中文大寫):
//!   `壹仟貳佰參拾肆元伍角陸分`
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end (apps/cli, or a web page via the ts-rs bindings)             │
//! │     raw text ──► parse_amount ──► Amount                                │
//! │                                     │                                   │
//! │  ┌──────────────────────────────────▼──────────────────────────────┐   │
//! │  │               ★ wordify-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  amount   │  │  english  │  │  chinese  │  │ register  │   │   │
//! │  │   │  Amount   │  │  chunks   │  │  groups   │  │ Rendering │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`amount`] - `Amount` (whole units + two-digit minor units)
//! - [`validation`] - parsing user text into an `Amount`
//! - [`english`] - English cheque words
//! - [`chinese`] - Chinese cheque numerals
//! - [`register`] - `Register`, `Casing`, `Rendering`
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use wordify_core::{format_chinese, format_english};
//!
//! assert_eq!(format_english(1000000.0), "One Million Dollars Only");
//! assert_eq!(format_chinese(1000.0), "壹仟元整");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod chinese;
pub mod english;
pub mod error;
pub mod register;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::Amount;
pub use chinese::{chinese_numerals, format_chinese};
pub use english::{english_words, format_english};
pub use error::ValidationError;
pub use register::{render, Casing, Register, Rendering};
pub use validation::parse_amount;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of fractional digits kept in an `Amount` (cents, or 角 + 分).
pub const MINOR_DIGITS: usize = 2;
