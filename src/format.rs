//! Numeric rendering for the display and history.
//!
//! The engine reports full-precision text; the fitting rule here is what a
//! presentation layer applies when a value no longer fits the display.

/// Display width above which fitting kicks in.
pub const MAX_DISPLAY_WIDTH: usize = 10;

/// Significant digits used when fitting long values.
pub const FIT_PRECISION: usize = 6;

/// Renders a value exactly as the display shows it.
///
/// Finite values use the shortest round-trip rendering; NaN and the
/// infinities are spelled out.
#[must_use]
pub fn number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value}")
    }
}

/// Renders `value` with `precision` significant digits.
///
/// Follows the fixed/exponential switch of JavaScript's
/// `Number.prototype.toPrecision`: exponential notation for magnitudes at
/// or above `10^precision` and below `10^-6`, fixed notation in between.
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if !value.is_finite() {
        return number(value);
    }
    if value == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    // Decimal exponent, read off the exponential rendering rather than
    // computed via log10, which misrounds near powers of ten.
    let exponent: i32 = {
        let sci = format!("{value:e}");
        sci.split_once('e')
            .and_then(|(_, exp)| exp.parse().ok())
            .unwrap_or(0)
    };

    if exponent < -6 || exponent >= precision as i32 {
        let rendered = format!("{:.*e}", precision - 1, value);
        // Normalize to the e+NN form used by displays.
        match rendered.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => rendered,
        }
    } else {
        let decimals = usize::try_from(precision as i32 - 1 - exponent).unwrap_or(0);
        format!("{value:.decimals$}")
    }
}

/// Applies the display-fitting rule.
///
/// Text wider than [`MAX_DISPLAY_WIDTH`] that parses as a number is
/// re-rendered at [`FIT_PRECISION`] significant digits; everything else
/// (including the error marker) passes through untouched.
#[must_use]
pub fn fit_display(text: &str) -> String {
    if text.len() > MAX_DISPLAY_WIDTH {
        if let Ok(value) = text.parse::<f64>() {
            return to_precision(value, FIT_PRECISION);
        }
    }
    text.to_string()
}
