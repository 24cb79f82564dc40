//! # Amount Module
//!
//! Provides the `Amount` type: a non-negative value split into whole
//! currency units and exactly two digits of sub-units.
//!
//! ## Two Ways To Split A Float
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The two registers disagree on what happens past the second decimal:    │
//! │                                                                         │
//! │  English (truncate):  1.999  → text "1.999" → 1 dollar, "99" cents      │
//! │  Chinese (round):     1.999  → fixed "2.00" → 2 yuan, 整                │
//! │                                                                         │
//! │  Both pad a single fractional digit on the right:                       │
//! │    5.5  → "5" + "50"   (fifty cents, never five)                        │
//! │    12.3 → "12" + "30"                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wordify_core::amount::Amount;
//!
//! let amount = Amount::from_f64_truncated(1234.56).unwrap();
//! assert_eq!(amount.whole(), 1234);
//! assert_eq!(amount.minor(), 56);
//!
//! let rounded = Amount::from_f64_rounded(1.999).unwrap();
//! assert_eq!(rounded.to_string(), "2.00");
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::MINOR_DIGITS;

/// Field name used in validation messages.
pub(crate) const FIELD: &str = "Amount";

// =============================================================================
// Amount Type
// =============================================================================

/// A non-negative monetary amount.
///
/// ## Design Decisions
/// - **u64 whole part**: sign is rejected at construction, never stored
/// - **u8 minor part**: always two digits of meaning (`5` is "05", not "50")
/// - **No float inside**: the float is turned into decimal text exactly once
///
/// Only `Serialize` is derived: deserializing would bypass the `minor < 100`
/// check in [`Amount::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Amount {
    /// Exported as `bigint`; the full `u64` range does not fit a JS number.
    whole: u64,
    minor: u8,
}

impl Amount {
    /// Creates an amount from whole units and hundredths.
    ///
    /// ## Example
    /// ```rust
    /// use wordify_core::amount::Amount;
    ///
    /// let amount = Amount::new(10, 99).unwrap();
    /// assert_eq!(amount.to_string(), "10.99");
    /// assert!(Amount::new(10, 100).is_err());
    /// ```
    pub fn new(whole: u64, minor: u8) -> Result<Self, ValidationError> {
        if minor > 99 {
            return Err(ValidationError::OutOfRange {
                field: "minor".to_string(),
                min: 0,
                max: 99,
            });
        }
        Ok(Amount { whole, minor })
    }

    /// Splits a float the way the English formatter reads it.
    ///
    /// The float is rendered as its shortest round-trip decimal text, the
    /// integer part is taken before the '.', and at most two fractional
    /// characters are kept. Further digits are dropped, not rounded.
    ///
    /// ## Example
    /// ```rust
    /// use wordify_core::amount::Amount;
    ///
    /// assert_eq!(Amount::from_f64_truncated(5.5).unwrap().minor(), 50);
    /// assert_eq!(Amount::from_f64_truncated(1.999).unwrap().minor(), 99);
    /// assert!(Amount::from_f64_truncated(-1.0).is_err());
    /// ```
    pub fn from_f64_truncated(value: f64) -> Result<Self, ValidationError> {
        let value = check_float(value)?;
        from_decimal_text(&value.to_string())
    }

    /// Splits a float the way the Chinese formatter reads it.
    ///
    /// The float is rounded to exactly two fractional digits first, to the
    /// nearest hundredth of its exact binary value. An exact tie (only
    /// possible at .125, .375, .625 and .875) goes to the larger hundredth.
    ///
    /// ## Example
    /// ```rust
    /// use wordify_core::amount::Amount;
    ///
    /// let amount = Amount::from_f64_rounded(1.999).unwrap();
    /// assert_eq!((amount.whole(), amount.minor()), (2, 0));
    ///
    /// let tie = Amount::from_f64_rounded(0.125).unwrap();
    /// assert_eq!(tie.minor(), 13);
    /// ```
    pub fn from_f64_rounded(value: f64) -> Result<Self, ValidationError> {
        let value = check_float(value)?;
        if !is_hundredths_tie(value) {
            return from_decimal_text(&format!("{:.*}", MINOR_DIGITS, value));
        }

        // `{:.2}` breaks ties to even; truncate and step up instead.
        // Tie fractions end in 25 or 75 cents plus a half, so minor stays <= 88.
        let truncated = from_decimal_text(&format!("{:.*}", MINOR_DIGITS + 1, value))?;
        Ok(Amount {
            whole: truncated.whole,
            minor: truncated.minor + 1,
        })
    }

    /// Whole currency units (dollars, yuan).
    #[inline]
    pub const fn whole(&self) -> u64 {
        self.whole
    }

    /// Sub-units, 0-99 (cents).
    #[inline]
    pub const fn minor(&self) -> u8 {
        self.minor
    }

    /// Tenths digit (角).
    #[inline]
    pub const fn jiao(&self) -> u8 {
        self.minor / 10
    }

    /// Hundredths digit (分).
    #[inline]
    pub const fn fen(&self) -> u8 {
        self.minor % 10
    }

    /// Checks if there is a non-zero sub-unit part.
    #[inline]
    pub const fn has_minor(&self) -> bool {
        self.minor != 0
    }
}

/// Rejects NaN, infinities and negatives; folds `-0.0` into `0.0`.
fn check_float(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field: FIELD.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: FIELD.to_string(),
        });
    }
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// True when `value` sits exactly halfway between two hundredths.
///
/// Such a value is `k + j/8` with `j` odd: a halfway point `(2n + 1) / 200`
/// is only representable in binary when the 25 cancels out. Multiplying by
/// 8 is exact, so the check needs no decimal text.
fn is_hundredths_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

/// Builds an amount from unsigned decimal text such as `"12"`, `"12.3"`,
/// `".5"` or `"1.999"`.
///
/// Fractional digits after the second are ignored; a single fractional
/// digit is right-padded with zero.
pub(crate) fn from_decimal_text(text: &str) -> Result<Amount, ValidationError> {
    let (whole_text, frac_text) = text.split_once('.').unwrap_or((text, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole_text) || !all_digits(frac_text) {
        return Err(ValidationError::InvalidFormat {
            field: FIELD.to_string(),
            reason: "only digits and a single decimal point are allowed".to_string(),
        });
    }

    let whole = if whole_text.is_empty() {
        0
    } else {
        whole_text
            .parse::<u64>()
            .map_err(|_| ValidationError::TooLarge {
                field: FIELD.to_string(),
                max: u64::MAX,
            })?
    };

    let minor = frac_text
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(MINOR_DIGITS)
        .fold(0u8, |acc, b| acc * 10 + (b - b'0'));

    Ok(Amount { whole, minor })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal form, always with two fractional digits.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole, self.minor)
    }
}

/// Parses user text with the same rules as [`crate::validation::parse_amount`].
impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validation::parse_amount(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
