//! Number parsing and formatting
//!
//! Separators come from an explicit [`NumberFormat`] value rather than the
//! process locale, so the same text always parses the same way.

use serde::{Deserialize, Serialize};

/// Decimal and grouping conventions used to read and write numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Insert grouping separators every three integer digits when formatting
    pub use_grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            use_grouping: true,
        }
    }
}

impl NumberFormat {
    pub fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
            use_grouping: true,
        }
    }

    /// Parse a decimal number such as `"-1,234.5"`
    ///
    /// Surrounding whitespace is ignored and grouping separators are
    /// accepted anywhere in the integer part. Exponents, `inf` and `NaN`
    /// are not numbers here.
    pub fn parse_double(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let mut normalized = String::with_capacity(text.len());
        let mut seen_decimal = false;
        let mut seen_digit = false;

        for (i, c) in text.chars().enumerate() {
            if c.is_ascii_digit() {
                seen_digit = true;
                normalized.push(c);
            } else if c == self.decimal_separator && !seen_decimal {
                seen_decimal = true;
                normalized.push('.');
            } else if c == self.grouping_separator && !seen_decimal {
                continue;
            } else if (c == '-' || c == '+') && i == 0 {
                normalized.push(c);
            } else {
                return None;
            }
        }

        if !seen_digit {
            return None;
        }
        normalized.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Parse and truncate toward zero
    pub fn parse_int(&self, text: &str) -> Option<i64> {
        let value = self.parse_double(text)?.trunc();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return None;
        }
        Some(value as i64)
    }

    pub fn parse_float(&self, text: &str) -> Option<f32> {
        self.parse_double(text).map(|v| v as f32)
    }

    /// Format with at most `max_fraction_digits` decimals, dropping
    /// trailing zeros
    pub fn format(&self, value: f64, max_fraction_digits: usize) -> String {
        self.format_with(value, max_fraction_digits, self.use_grouping)
    }

    /// Parse `text` and re-format it with at most `decimals` decimals
    pub fn format_number(&self, text: &str, decimals: usize) -> Option<String> {
        let value = self.parse_double(text)?;
        Some(self.format(value, decimals))
    }

    /// Round to `decimals` and drop trailing zeros, without grouping
    ///
    /// `"0.10000000"` with 2 decimals becomes `"0.1"`.
    pub fn removed_trailing_zeros(&self, text: &str, decimals: usize) -> Option<String> {
        let value = self.parse_double(text)?;
        Some(self.format_with(value, decimals, false))
    }

    fn format_with(&self, value: f64, max_fraction_digits: usize, grouping: bool) -> String {
        let fixed = format!("{:.*}", max_fraction_digits, value);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", int_part),
        };
        // "-0" after rounding
        let sign = if digits.chars().all(|c| c == '0') && frac_part.is_empty() {
            ""
        } else {
            sign
        };

        let mut out = String::from(sign);
        if grouping {
            out.push_str(&group_thousands(digits, self.grouping_separator));
        } else {
            out.push_str(digits);
        }
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
