//! # Chinese Cheque Numerals (中文大寫)
//!
//! Traditional Chinese financial numerals with positional units and the
//! anti-fraud zero rules.
//!
//! ## Grouping
//! ```text
//! 1,0200,3000.05
//!
//!   group 2     group 1     group 0
//!   "1"         "0200"      "3000"
//!   壹 + 億     零貳佰 + 萬  參仟
//!
//!   壹億零貳佰萬參仟元零伍分
//! ```
//!
//! ## Zero Rules
//! - A run of zeros between two non-zero digits is written as one 零.
//! - A block never ends on 零, and the whole number never starts with one.
//! - An all-zero group contributes a single pending 零 and no scale suffix.
//!
//! Zeros are tracked as a pending flag while digits are emitted left to
//! right, so 零 is only written when a later non-zero digit needs it.

use crate::amount::Amount;

/// Financial numerals 0-9.
const DIGITS: [char; 10] = ['零', '壹', '貳', '參', '肆', '伍', '陸', '柒', '捌', '玖'];

/// Unit suffix by position within a 4-digit group (from the right).
const UNITS: [&str; 4] = ["", "拾", "佰", "仟"];

/// Scale suffix by group index. Five groups cover all of `u64`.
const SCALES: [&str; 5] = ["", "萬", "億", "兆", "京"];

const ZERO: char = DIGITS[0];
const YUAN: char = '元';
const JIAO: char = '角';
const FEN: char = '分';
const EXACT: char = '整';

/// Formats an amount as Chinese cheque numerals.
///
/// The amount is rounded to two fractional digits first. Returns `""` for
/// NaN, infinite, negative or out-of-range input; zero always formats to a
/// non-empty string, so an empty result means failure.
///
/// ## Example
/// ```rust
/// use wordify_core::chinese::format_chinese;
///
/// assert_eq!(format_chinese(1234.56), "壹仟貳佰參拾肆元伍角陸分");
/// assert_eq!(format_chinese(1000.0), "壹仟元整");
/// assert_eq!(format_chinese(-5.0), "");
/// ```
pub fn format_chinese(amount: f64) -> String {
    Amount::from_f64_rounded(amount)
        .map(|amount| chinese_numerals(&amount))
        .unwrap_or_default()
}

/// Formats an already validated amount as Chinese cheque numerals.
pub fn chinese_numerals(amount: &Amount) -> String {
    let mut out = integer_numerals(amount.whole());
    out.push(YUAN);
    push_decimal(&mut out, amount.jiao(), amount.fen());
    out
}

/// Converts one group of up to four digits.
///
/// Leading zeros inside the block are kept as a single 零 (the block may sit
/// after a higher group); trailing zeros are dropped. Characters other than
/// ASCII digits are ignored, and only the last four digits are used.
///
/// ## Example
/// ```rust
/// use wordify_core::chinese::convert_block;
///
/// assert_eq!(convert_block("1010"), "壹仟零壹拾");
/// assert_eq!(convert_block("0001"), "零壹");
/// assert_eq!(convert_block("0000"), "");
/// ```
pub fn convert_block(block: &str) -> String {
    let digits: Vec<u8> = block
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let digits = &digits[digits.len().saturating_sub(UNITS.len())..];

    let mut writer = NumeralWriter::new(true);
    writer.block(digits);
    writer.finish()
}

/// Whole-number numerals; "零" for zero.
fn integer_numerals(whole: u64) -> String {
    if whole == 0 {
        return ZERO.to_string();
    }

    let digits: Vec<u8> = whole.to_string().bytes().map(|b| b - b'0').collect();
    let head = match digits.len() % UNITS.len() {
        0 => UNITS.len(),
        n => n,
    };
    let group_count = (digits.len() - head) / UNITS.len() + 1;

    let mut writer = NumeralWriter::new(false);
    let mut start = 0;
    for index in (0..group_count).rev() {
        let end = if start == 0 { head } else { start + UNITS.len() };
        let group = &digits[start..end];

        if group.iter().all(|&d| d == 0) {
            writer.zero_group();
        } else {
            writer.block(group);
            writer.scale(SCALES[index]);
        }
        start = end;
    }
    writer.finish()
}

/// 角/分 suffix after 元.
fn push_decimal(out: &mut String, jiao: u8, fen: u8) {
    match (jiao, fen) {
        (0, 0) => out.push(EXACT),
        (0, fen) => {
            out.push(ZERO);
            out.push(DIGITS[usize::from(fen)]);
            out.push(FEN);
        }
        (jiao, fen) => {
            out.push(DIGITS[usize::from(jiao)]);
            out.push(JIAO);
            if fen == 0 {
                out.push(EXACT);
            } else {
                out.push(DIGITS[usize::from(fen)]);
                out.push(FEN);
            }
        }
    }
}

// =============================================================================
// Numeral Writer
// =============================================================================

/// Emits digits left to right, holding back zeros until a non-zero digit
/// follows.
struct NumeralWriter {
    out: String,
    pending_zero: bool,
    /// Whether a pending zero may be written before anything else.
    leading_zero: bool,
}

impl NumeralWriter {
    fn new(leading_zero: bool) -> Self {
        NumeralWriter {
            out: String::new(),
            pending_zero: false,
            leading_zero,
        }
    }

    /// Writes one group; `digits` are in natural order, at most four.
    fn block(&mut self, digits: &[u8]) {
        let len = digits.len();
        for (i, &digit) in digits.iter().enumerate() {
            self.digit(digit, len - 1 - i);
        }
    }

    fn digit(&mut self, digit: u8, position: usize) {
        if digit == 0 {
            self.pending_zero = true;
            return;
        }
        if self.pending_zero && (self.leading_zero || !self.out.is_empty()) {
            self.out.push(ZERO);
        }
        self.pending_zero = false;
        self.out.push(DIGITS[usize::from(digit)]);
        self.out.push_str(UNITS[position]);
    }

    /// Closes a non-zero group; zeros trailing inside it are dropped.
    fn scale(&mut self, suffix: &str) {
        self.out.push_str(suffix);
        self.pending_zero = false;
    }

    fn zero_group(&mut self) {
        self.pending_zero = true;
    }

    fn finish(self) -> String {
        self.out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn numerals(whole: u64, minor: u8) -> String {
        chinese_numerals(&Amount::new(whole, minor).unwrap())
    }

    #[test]
    fn test_basic() {
        assert_eq!(format_chinese(1234.56), "壹仟貳佰參拾肆元伍角陸分");
    }

    #[test]
    fn test_trailing_zero_groups() {
        assert_eq!(format_chinese(1000.00), "壹仟元整");
        assert_eq!(numerals(10_000, 0), "壹萬元整");
        assert_eq!(numerals(100_000_000, 0), "壹億元整");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_chinese(0.0), "零元整");
        assert_eq!(numerals(0, 56), "零元伍角陸分");
    }

    #[test]
    fn test_invalid_input_yields_empty() {
        assert_eq!(format_chinese(-5.0), "");
        assert_eq!(format_chinese(f64::NAN), "");
        assert_eq!(format_chinese(f64::INFINITY), "");
        assert_eq!(format_chinese(1e20), "");
    }

    #[test]
    fn test_zero_inside_group() {
        assert_eq!(numerals(1001, 0), "壹仟零壹元整");
        assert_eq!(numerals(1010, 0), "壹仟零壹拾元整");
        assert_eq!(numerals(105, 0), "壹佰零伍元整");
    }

    #[test]
    fn test_zero_across_groups() {
        assert_eq!(numerals(10_001, 0), "壹萬零壹元整");
        assert_eq!(numerals(10_200, 0), "壹萬零貳佰元整");
        assert_eq!(numerals(12_000, 0), "壹萬貳仟元整");
        assert_eq!(numerals(12_003_000, 0), "壹仟貳佰萬參仟元整");
        assert_eq!(numerals(12_000_300, 0), "壹仟貳佰萬零參佰元整");
    }

    #[test]
    fn test_all_zero_middle_group() {
        assert_eq!(numerals(100_000_001, 0), "壹億零壹元整");
        assert_eq!(numerals(100_003_000, 0), "壹億零參仟元整");
        assert_eq!(numerals(100_010_000, 0), "壹億零壹萬元整");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(numerals(5, 0), "伍元整");
        assert_eq!(numerals(5, 7), "伍元零柒分");
        assert_eq!(numerals(5, 30), "伍元參角整");
        assert_eq!(numerals(5, 31), "伍元參角壹分");
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(format_chinese(1.999), "貳元整");
        assert_eq!(format_chinese(12.3), "壹拾貳元參角整");
    }

    #[test]
    fn test_exact_half_cent_rounds_up() {
        assert_eq!(format_chinese(0.125), "零元壹角參分");
        assert_eq!(format_chinese(0.625), "零元陸角參分");
        assert_eq!(format_chinese(1.125), "壹元壹角參分");
        assert_eq!(format_chinese(1.005), "壹元整");
    }

    #[test]
    fn test_large_scales() {
        assert_eq!(numerals(1_0000_0000_0000, 0), "壹兆元整");
        assert_eq!(numerals(1_0000_0000_0000_0000, 0), "壹京元整");
        assert_eq!(
            numerals(u64::MAX, 0),
            "壹仟捌佰肆拾肆京陸仟柒佰肆拾肆兆零柒佰參拾柒億零玖佰伍拾伍萬壹仟陸佰壹拾伍元整"
        );
    }

    #[test]
    fn test_convert_block() {
        assert_eq!(convert_block("1234"), "壹仟貳佰參拾肆");
        assert_eq!(convert_block("1000"), "壹仟");
        assert_eq!(convert_block("0200"), "零貳佰");
        assert_eq!(convert_block("7"), "柒");
        assert_eq!(convert_block(""), "");
    }

    #[test]
    fn test_never_doubles_zero() {
        let samples = [
            0, 1, 10, 100, 101, 1001, 10_001, 100_100, 1_000_001, 10_100_101, 900_000_009,
            1_0000_0001_0000, 1_0001_0000_0001,
        ];
        for whole in samples {
            for minor in [0, 5, 50, 55] {
                let text = numerals(whole, minor);
                assert!(!text.contains("零零"), "{whole}.{minor:02} -> {text}");
                if whole != 0 {
                    assert!(!text.starts_with(ZERO), "{whole} -> {text}");
                    assert!(!text.contains("零元"), "{whole} -> {text}");
                }
                for scale in &SCALES[1..] {
                    assert!(!text.contains(&format!("零{scale}")), "{whole} -> {text}");
                }
            }
        }
    }

    #[test]
    fn test_character_set_is_closed() {
        let mut allowed: Vec<char> = DIGITS.to_vec();
        allowed.extend(UNITS.iter().chain(SCALES.iter()).flat_map(|s| s.chars()));
        allowed.extend([YUAN, JIAO, FEN, EXACT]);

        for value in [0.0, 0.05, 1234.56, 100_000_001.1, 98_765_432_101.99] {
            let text = format_chinese(value);
            assert!(text.chars().all(|c| allowed.contains(&c)), "{text}");
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(format_chinese(8765.43), format_chinese(8765.43));
    }
}
