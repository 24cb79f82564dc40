//! # Validation Module
//!
//! Turns raw user text into an [`Amount`], rejecting what the formatters
//! must never see.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (CLI / web)                                        │
//! │  └── Collects raw text                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── empty?          → Required                                        │
//! │  ├── "-12"           → Negative  ("Amount cannot be negative")         │
//! │  ├── "12abc"         → InvalidFormat                                   │
//! │  └── "12.345"        → Amount { whole: 12, minor: 34 }                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Formatters (english / chinese)                               │
//! │  └── Assume a valid Amount                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wordify_core::validation::parse_amount;
//!
//! let amount = parse_amount("1,234.56").unwrap();
//! assert_eq!(amount.whole(), 1234);
//! assert!(parse_amount("-5").is_err());
//! ```

use crate::amount::{from_decimal_text, Amount, FIELD};
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses an amount typed by a user.
///
/// ## Rules
/// - Surrounding whitespace is ignored; an optional leading '+' is allowed
/// - Digits with at most one '.'; ".5" and "5." are accepted
/// - ',' may group the integer part in threes ("1,234,567")
/// - A leading '-' on an otherwise valid number is `Negative`
/// - Fractional digits past the second are dropped, not rounded
///
/// The text is never converted to a float, so "0.29" is exactly 29 cents.
pub fn parse_amount(raw: &str) -> ValidationResult<Amount> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: FIELD.to_string(),
        });
    }

    if let Some(rest) = text.strip_prefix('-') {
        // "-abc" is a format problem, "-5" is a sign problem
        return Err(match unsigned_decimal(rest) {
            Ok(_) => ValidationError::Negative {
                field: FIELD.to_string(),
            },
            Err(err) => err,
        });
    }

    let text = text.strip_prefix('+').unwrap_or(text);
    let plain = unsigned_decimal(text)?;
    from_decimal_text(&plain)
}

/// Checks the shape of an unsigned decimal and strips grouping commas.
fn unsigned_decimal(text: &str) -> ValidationResult<String> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: FIELD.to_string(),
        reason: reason.to_string(),
    };

    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("expected at least one digit"));
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("fraction must contain only digits"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit() || b == b',') {
        return Err(invalid("expected digits and a single decimal point"));
    }

    if whole.contains(',') {
        let mut groups = whole.split(',');
        let head_ok = groups
            .next()
            .map(|g| (1..=3).contains(&g.len()))
            .unwrap_or(false);
        if !head_ok || !groups.all(|g| g.len() == 3) {
            return Err(invalid("thousands separators must group digits in threes"));
        }
    }

    let whole: String = whole.chars().filter(|&c| c != ',').collect();
    if frac.is_empty() {
        Ok(whole)
    } else {
        Ok(format!("{}.{}", whole, frac))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(raw: &str) -> (u64, u8) {
        let amount = parse_amount(raw).unwrap();
        (amount.whole(), amount.minor())
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parts("1234.56"), (1234, 56));
        assert_eq!(parts("0"), (0, 0));
        assert_eq!(parts("  42  "), (42, 0));
        assert_eq!(parts("+7.10"), (7, 10));
    }

    #[test]
    fn test_partial_forms() {
        assert_eq!(parts(".5"), (0, 50));
        assert_eq!(parts("5."), (5, 0));
        assert_eq!(parts("12.3"), (12, 30));
    }

    #[test]
    fn test_exact_cents_without_float() {
        assert_eq!(parts("0.29"), (0, 29));
        assert_eq!(parts("1.999"), (1, 99));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parts("1,234,567.89"), (1_234_567, 89));
        assert!(parse_amount("1,23").is_err());
        assert!(parse_amount(",123").is_err());
        assert!(parse_amount("1234,567").is_err());
    }

    #[test]
    fn test_required() {
        assert!(matches!(
            parse_amount("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_negative() {
        let err = parse_amount("-5").unwrap_err();
        assert_eq!(err.to_string(), "Amount cannot be negative");
        assert!(matches!(
            parse_amount("-0.50"),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_invalid_format() {
        for raw in ["abc", "12abc", "1.2.3", ".", "-", "--5", "-x", "1e5", "NaN"] {
            assert!(
                matches!(parse_amount(raw), Err(ValidationError::InvalidFormat { .. })),
                "{raw:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_too_large() {
        assert!(parse_amount("18446744073709551615").is_ok());
        assert!(matches!(
            parse_amount("18446744073709551616"),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_from_str_uses_same_rules() {
        let amount: Amount = "3.5".parse().unwrap();
        assert_eq!(amount.minor(), 50);
        assert!("-3".parse::<Amount>().is_err());
    }
}
