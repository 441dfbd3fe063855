//! Numeric entry policy for timeline fields
//!
//! Text is sanitized before it is parsed: an empty field is coerced to "0"
//! and a comma decimal separator is normalized to a period, so transient
//! states and locale-specific entry never surface as parse errors.

use serde::{Deserialize, Serialize};

/// Normalize field text in place. Both transforms are idempotent.
pub fn sanitize(text: &mut String) {
    if text.is_empty() {
        text.push('0');
    }
    if text.contains(',') {
        *text = text.replace(',', ".");
    }
}

/// Accepted value range and precision for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericFormat {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
    /// Maximum number of fractional digits.
    pub max_decimals: usize,
}

impl Default for NumericFormat {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 999.999,
            max_decimals: 3,
        }
    }
}

impl NumericFormat {
    /// Parse field text into a value, or `None` when the text is not a
    /// number or falls outside the accepted format.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let trimmed = text.trim();
        if let Some((_, fraction)) = trimmed.split_once('.') {
            if fraction.len() > self.max_decimals {
                return None;
            }
        }
        let value = trimmed.parse::<f64>().ok()?;
        (value >= self.min && value < self.max).then_some(value)
    }
}

/// Decimal string representation used to pre-fill fields from a value.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}
