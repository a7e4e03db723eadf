//! The current operand - typed text, computed value, or the error marker.
//!
//! Keeping typed composition and computed results as separate states means
//! arithmetic never round-trips through strings, while the digit-entry
//! invariants hold for everything the user types: the entry is never
//! empty (it defaults to `"0"`), carries at most one decimal point, and a
//! decimal point on a fresh entry becomes `"0."` so typed text always
//! parses as a number.

use serde::{Deserialize, Serialize};

use crate::format;

/// Display text of the division-by-zero marker.
pub const ERROR_TEXT: &str = "Error";

/// The operand currently shown and edited.
///
/// Only the engine mutates entries; the enum is public so adapters can
/// match on the state when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Entry {
    /// Digit-by-digit composition, kept verbatim as typed.
    Typed(String),

    /// A computed result awaiting display or reuse. May be NaN or
    /// infinite; contagion through later arithmetic is standard IEEE
    /// behavior.
    Value(f64),

    /// The distinguished division-by-zero marker. Never parses back into
    /// a number.
    Error,
}

impl Entry {
    /// A fresh entry showing `"0"`.
    #[must_use]
    pub fn zero() -> Self {
        Self::Typed("0".to_string())
    }

    /// Starts a fresh typed entry from a digit press.
    ///
    /// The digit is expected to be validated (`0..=9`) by the caller.
    #[must_use]
    pub fn fresh_digit(digit: u8) -> Self {
        Self::Typed(digit_char(digit).to_string())
    }

    /// Starts a fresh typed entry from a decimal-point press (`"0."`).
    #[must_use]
    pub fn fresh_decimal() -> Self {
        Self::Typed("0.".to_string())
    }

    /// Absorbs a digit press into the entry.
    ///
    /// A lone `"0"` is replaced rather than extended, so leading zeros
    /// never accumulate. Typing after a finite computed result re-opens
    /// its full-precision rendering; NaN, infinities, and the error
    /// marker start a fresh entry instead.
    pub fn push_digit(&mut self, digit: u8) {
        match self {
            Self::Typed(text) => {
                if text.as_str() == "0" {
                    *text = digit_char(digit).to_string();
                } else {
                    text.push(digit_char(digit));
                }
            }
            Self::Value(v) if v.is_finite() => {
                let mut text = format::number(*v);
                text.push(digit_char(digit));
                *self = Self::Typed(text);
            }
            Self::Value(_) | Self::Error => *self = Self::fresh_digit(digit),
        }
    }

    /// Absorbs a decimal-point press; a duplicate decimal point is a
    /// no-op.
    pub fn push_decimal(&mut self) {
        match self {
            Self::Typed(text) => {
                if !text.contains('.') {
                    text.push('.');
                }
            }
            Self::Value(v) if v.is_finite() => {
                let mut text = format::number(*v);
                if !text.contains('.') {
                    text.push('.');
                }
                *self = Self::Typed(text);
            }
            Self::Value(_) | Self::Error => *self = Self::fresh_decimal(),
        }
    }

    /// Deletes the last typed character.
    ///
    /// An emptied entry (or a bare sign) resets to `"0"`. Computed
    /// results and the error marker reset to `"0"` outright rather than
    /// slicing rendered text.
    pub fn pop(&mut self) {
        match self {
            Self::Typed(text) => {
                text.pop();
                if text.is_empty() || text.as_str() == "-" {
                    *self = Self::zero();
                }
            }
            Self::Value(_) | Self::Error => *self = Self::zero(),
        }
    }

    /// Numeric value of the entry, if it has one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Typed(text) => text.parse().ok(),
            Self::Value(v) => Some(*v),
            Self::Error => None,
        }
    }

    /// The exact text shown on the display.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Typed(text) => text.clone(),
            Self::Value(v) => format::number(*v),
            Self::Error => ERROR_TEXT.to_string(),
        }
    }

    /// Returns true if this entry is the division-by-zero marker.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

fn digit_char(digit: u8) -> char {
    char::from(b'0' + (digit % 10))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let entry = Entry::default();
        assert_eq!(entry.text(), "0");
        assert_eq!(entry.value(), Some(0.0));
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut entry = Entry::zero();
        entry.push_digit(0);
        assert_eq!(entry.text(), "0");
        entry.push_digit(7);
        assert_eq!(entry.text(), "7");
        entry.push_digit(0);
        assert_eq!(entry.text(), "70");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut entry = Entry::zero();
        entry.push_decimal();
        assert_eq!(entry.text(), "0.");
        entry.push_digit(5);
        entry.push_decimal();
        entry.push_digit(5);
        assert_eq!(entry.text(), "0.55");
        assert_eq!(entry.value(), Some(0.55));
    }

    #[test]
    fn test_fresh_decimal_parses() {
        let entry = Entry::fresh_decimal();
        assert_eq!(entry.text(), "0.");
        assert_eq!(entry.value(), Some(0.0));
    }

    #[test]
    fn test_computed_value_reopens_for_editing() {
        let mut entry = Entry::Value(5.0);
        entry.push_digit(7);
        assert_eq!(entry.text(), "57");
        assert_eq!(entry.value(), Some(57.0));

        let mut entry = Entry::Value(5.0);
        entry.push_decimal();
        entry.push_digit(5);
        assert_eq!(entry.value(), Some(5.5));
    }

    #[test]
    fn test_decimal_on_fractional_value_is_rejected() {
        let mut entry = Entry::Value(0.5);
        entry.push_decimal();
        assert_eq!(entry.text(), "0.5");
    }

    #[test]
    fn test_nonfinite_values_start_fresh() {
        let mut entry = Entry::Value(f64::NAN);
        entry.push_digit(3);
        assert_eq!(entry.text(), "3");

        let mut entry = Entry::Value(f64::INFINITY);
        entry.push_decimal();
        assert_eq!(entry.text(), "0.");
    }

    #[test]
    fn test_error_marker() {
        let entry = Entry::Error;
        assert!(entry.is_error());
        assert_eq!(entry.text(), "Error");
        assert_eq!(entry.value(), None);

        let mut entry = Entry::Error;
        entry.push_digit(4);
        assert_eq!(entry.text(), "4");
    }

    #[test]
    fn test_pop_typed() {
        let mut entry = Entry::Typed("123".to_string());
        entry.pop();
        assert_eq!(entry.text(), "12");
        entry.pop();
        entry.pop();
        assert_eq!(entry.text(), "0");
        entry.pop();
        assert_eq!(entry.text(), "0");
    }

    #[test]
    fn test_pop_resets_computed_and_error() {
        let mut entry = Entry::Value(3.25);
        entry.pop();
        assert_eq!(entry.text(), "0");

        let mut entry = Entry::Error;
        entry.pop();
        assert_eq!(entry.text(), "0");
    }

    #[test]
    fn test_negative_value_editing() {
        // A negated result re-opens with its sign intact.
        let mut entry = Entry::Value(-5.0);
        entry.push_digit(7);
        assert_eq!(entry.text(), "-57");
        assert_eq!(entry.value(), Some(-57.0));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let entry = Entry::Typed("3.14".to_string());
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);

        let json = serde_json::to_string(&Entry::Error).unwrap();
        assert_eq!(json, r#"{"state":"error"}"#);
    }
}
