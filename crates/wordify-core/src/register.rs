//! # Registers
//!
//! The two output grammars and the result record handed to front ends.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐
//! │    Register     │   │     Casing      │   │      Rendering       │
//! │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │
//! │  English        │   │  Normal         │   │  register, casing    │
//! │  Chinese        │   │  Upper          │   │  amount, text        │
//! └─────────────────┘   └─────────────────┘   └──────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::amount::Amount;
use crate::chinese::chinese_numerals;
use crate::english::english_words;

// =============================================================================
// Register
// =============================================================================

/// Which numeral system to write the amount in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Register {
    /// "One Thousand ... Dollars and ... Cents Only"
    English,
    /// 中文大寫: "壹仟...元...角...分"
    Chinese,
}

impl Register {
    /// All registers, in display order.
    pub const ALL: [Register; 2] = [Register::English, Register::Chinese];

    /// Formats a validated amount in this register.
    pub fn format(self, amount: &Amount) -> String {
        match self {
            Register::English => english_words(amount),
            Register::Chinese => chinese_numerals(amount),
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Register::English => "English",
            Register::Chinese => "Chinese",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Casing
// =============================================================================

/// Presentation casing. Chinese numerals have no case, so `Upper` only
/// changes English output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Casing {
    #[default]
    Normal,
    /// "ONE THOUSAND DOLLARS ONLY"
    Upper,
}

impl Casing {
    pub fn apply(self, text: String) -> String {
        match self {
            Casing::Normal => text,
            Casing::Upper => text.to_uppercase(),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// One formatted result.
///
/// ## Serialization
/// ```json
/// {
///   "register": "english",
///   "casing": "upper",
///   "amount": { "whole": 12, "minor": 50 },
///   "text": "TWELVE DOLLARS AND FIFTY CENTS ONLY"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Rendering {
    pub register: Register,
    pub casing: Casing,
    pub amount: Amount,
    pub text: String,
}

/// Formats `amount` in `register` and applies `casing`.
///
/// ## Example
/// ```rust
/// use wordify_core::{render, Amount, Casing, Register};
///
/// let amount = Amount::new(12, 50).unwrap();
/// let rendering = render(&amount, Register::English, Casing::Upper);
/// assert_eq!(rendering.text, "TWELVE DOLLARS AND FIFTY CENTS ONLY");
/// ```
pub fn render(amount: &Amount, register: Register, casing: Casing) -> Rendering {
    Rendering {
        register,
        casing,
        amount: *amount,
        text: casing.apply(register.format(amount)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_dispatch() {
        let amount = Amount::new(1000, 0).unwrap();
        assert_eq!(Register::English.format(&amount), "One Thousand Dollars Only");
        assert_eq!(Register::Chinese.format(&amount), "壹仟元整");
    }

    #[test]
    fn test_upper_only_touches_english() {
        let amount = Amount::new(1234, 56).unwrap();
        assert_eq!(
            render(&amount, Register::English, Casing::Upper).text,
            "ONE THOUSAND TWO HUNDRED THIRTY FOUR DOLLARS AND FIFTY SIX CENTS ONLY"
        );
        assert_eq!(
            render(&amount, Register::Chinese, Casing::Upper).text,
            render(&amount, Register::Chinese, Casing::Normal).text
        );
    }

    #[test]
    fn test_rendering_serializes() {
        let amount = Amount::new(0, 50).unwrap();
        let rendering = render(&amount, Register::English, Casing::Normal);
        let json = serde_json::to_value(&rendering).unwrap();
        assert_eq!(json["register"], "english");
        assert_eq!(json["casing"], "normal");
        assert_eq!(json["amount"]["minor"], 50);
        assert_eq!(json["text"], "Fifty Cents Only");
    }

    #[test]
    fn test_register_deserializes_lowercase() {
        let register: Register = serde_json::from_str("\"chinese\"").unwrap();
        assert_eq!(register, Register::Chinese);
        assert_eq!(register.to_string(), "Chinese");
    }
}
