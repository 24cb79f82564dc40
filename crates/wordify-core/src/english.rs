//! # English Cheque Words
//!
//! Long-form English words for a dollar amount.
//!
//! ## Layout
//! ```text
//! 1,234.56
//!   │   │
//!   │   └─ cents "56" ──► convert_chunk(56) ──► "Fifty Six Cents"
//!   │
//!   └─ chunks of 3 (least significant first):
//!        234 ──► "Two Hundred Thirty Four"
//!          1 ──► "One" + " Thousand"
//!
//! "One Thousand Two Hundred Thirty Four Dollars and Fifty Six Cents Only"
//! ```
//!
//! ## Example
//! ```rust
//! use wordify_core::english::format_english;
//!
//! assert_eq!(format_english(0.0), "Zero Dollars Only");
//! assert_eq!(format_english(0.5), "Fifty Cents Only");
//! ```

use crate::amount::Amount;

/// Direct lookup for 0-19 ("" for zero).
const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

/// Tens digit 2-9.
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Scale word per 3-digit chunk index. Seven chunks cover all of `u64`.
const SCALES: [&str; 7] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
];

/// Formats an amount as cheque words.
///
/// The fraction is read from the float's decimal text, truncated to two
/// digits, and a lone tenths digit counts as tens of cents (`12.3` is
/// thirty cents). NaN, negative and out-of-range input yields `""`; callers
/// are expected to reject those first.
///
/// ## Example
/// ```rust
/// use wordify_core::english::format_english;
///
/// assert_eq!(
///     format_english(1234.56),
///     "One Thousand Two Hundred Thirty Four Dollars and Fifty Six Cents Only"
/// );
/// ```
pub fn format_english(amount: f64) -> String {
    Amount::from_f64_truncated(amount)
        .map(|amount| english_words(&amount))
        .unwrap_or_default()
}

/// Formats an already validated amount as cheque words.
pub fn english_words(amount: &Amount) -> String {
    let mut result = if amount.whole() == 0 {
        "Zero Dollars".to_string()
    } else {
        format!("{} Dollars", integer_words(amount.whole()))
    };

    if amount.has_minor() {
        let cents = convert_chunk(u16::from(amount.minor()));
        if amount.whole() == 0 {
            result = format!("{} Cents", cents);
        } else {
            result.push_str(" and ");
            result.push_str(&cents);
            result.push_str(" Cents");
        }
    }

    result.push_str(" Only");
    result
}

/// Converts 0-999 to words without surrounding whitespace.
///
/// Zero yields an empty string; "Zero" is never produced here.
///
/// ## Example
/// ```rust
/// use wordify_core::english::convert_chunk;
///
/// assert_eq!(convert_chunk(115), "One Hundred Fifteen");
/// assert_eq!(convert_chunk(0), "");
/// ```
pub fn convert_chunk(n: u16) -> String {
    let mut n = usize::from(n % 1000);
    let mut words: Vec<&str> = Vec::with_capacity(4);

    if n >= 100 {
        words.push(ONES[n / 100]);
        words.push("Hundred");
        n %= 100;
    }

    if n >= 20 {
        words.push(TENS[n / 10]);
        n %= 10;
    }

    if n > 0 {
        words.push(ONES[n]);
    }

    words.join(" ")
}

/// Whole-number words, most significant chunk first. Zero chunks are skipped
/// together with their scale word.
fn integer_words(mut n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut scale = 0;

    while n > 0 {
        let chunk = (n % 1000) as u16;
        if chunk > 0 {
            let mut words = convert_chunk(chunk);
            if !SCALES[scale].is_empty() {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            chunks.push(words);
        }
        n /= 1000;
        scale += 1;
    }

    chunks.reverse();
    chunks.join(" ")
}

// =============================================================================
// Unit Tests
// =============================================================================
