//! Operator vocabulary and arithmetic.
//!
//! Binary operators, unary functions, constants, memory operations, and
//! the angle mode, each with the arithmetic it stands for. The engine never
//! computes anything itself; it routes operands through the `apply`
//! functions here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by [`BinaryOp::apply`] for a zero right-hand divisor.
///
/// This is the one arithmetic failure that gets a distinguished display
/// state instead of an IEEE result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivideByZero;

/// Binary operators.
///
/// Chaining is strictly left to right; there is no precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    /// Division; a zero right-hand side is the distinguished error case.
    Divide,
    /// `lhs ^ rhs`.
    Power,
    /// `lhs ^ (1/rhs)` - the rhs-th root of lhs.
    Root,
    /// `lhs * 10^rhs` - scientific-notation entry.
    Exponent,
}

impl BinaryOp {
    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// [`DivideByZero`] when dividing by an exact zero. Every other input
    /// produces an IEEE result (possibly NaN or infinite).
    #[allow(clippy::float_cmp)]
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, DivideByZero> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(DivideByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Power => Ok(lhs.powf(rhs)),
            Self::Root => Ok(lhs.powf(rhs.recip())),
            Self::Exponent => Ok(lhs * pow10(rhs)),
        }
    }

    /// The display symbol used in the history line.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
            Self::Power => "^",
            Self::Root => "yroot",
            Self::Exponent => "E",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary functions.
///
/// Each operates on the current entry alone and never touches the pending
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// `x * -1`.
    Negate,
    /// `x / 100`.
    Percent,
    Square,
    Cube,
    /// `e^x`.
    Exp,
    /// `10^x`.
    TenPower,
    /// `1/x`; no zero guard - `1/0` is infinity, an accepted edge case.
    Reciprocal,
    Sqrt,
    Cbrt,
    Ln,
    Log10,
    /// Integer-domain factorial; negative or fractional input is NaN.
    Factorial,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    /// Ignores the input and draws uniformly from [0,1).
    Random,
}

impl UnaryOp {
    /// Applies the function to `value` under the given angle mode.
    #[must_use]
    pub fn apply(self, value: f64, mode: AngleMode) -> f64 {
        match self {
            Self::Negate => -value,
            Self::Percent => value / 100.0,
            Self::Square => value * value,
            Self::Cube => value * value * value,
            Self::Exp => value.exp(),
            Self::TenPower => pow10(value),
            Self::Reciprocal => value.recip(),
            Self::Sqrt => value.sqrt(),
            Self::Cbrt => value.cbrt(),
            Self::Ln => value.ln(),
            Self::Log10 => value.log10(),
            Self::Factorial => factorial(value),
            Self::Sin => mode.to_radians(value).sin(),
            Self::Cos => mode.to_radians(value).cos(),
            Self::Tan => mode.to_radians(value).tan(),
            // Hyperbolic functions are always radian-domain.
            Self::Sinh => value.sinh(),
            Self::Cosh => value.cosh(),
            Self::Tanh => value.tanh(),
            Self::Random => rand::random(),
        }
    }

    /// Returns true if the result depends on the angle mode.
    #[must_use]
    pub const fn is_angle_sensitive(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

/// Constants entered with a single press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constant {
    Pi,
    E,
    /// A fresh uniform [0,1) draw on every press.
    Random,
}

impl Constant {
    /// The value the entry is overwritten with.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
            Self::Random => rand::random(),
        }
    }
}

/// Memory-accumulator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryOp {
    /// Reset the accumulator to zero.
    Clear,
    /// Add the current entry to the accumulator.
    Add,
    /// Subtract the current entry from the accumulator.
    Subtract,
    /// Overwrite the entry with the accumulator value.
    Recall,
}

/// Degrees/Radians switch for the trigonometric functions.
///
/// Survives `Clear`; only sin/cos/tan consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// The mode a toggle press switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Converts a value expressed in this mode to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_radians(),
            Self::Radians => value,
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degrees => write!(f, "degrees"),
            Self::Radians => write!(f, "radians"),
        }
    }
}

/// `10^exp`, exact for integral exponents.
///
/// `powf` is only accurate to 1 ulp, which would put scientific-notation
/// entry a hair off the round power of ten it names.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn pow10(exp: f64) -> f64 {
    if exp.fract() == 0.0 && exp.abs() <= 308.0 {
        10f64.powi(exp as i32)
    } else {
        10f64.powf(exp)
    }
}

/// Iterative factorial over the non-negative integer domain.
///
/// Negative, fractional, and NaN inputs produce NaN; 0 and 1 produce 1.
/// The running product stops early once it saturates at infinity so the
/// loop stays bounded by the representable range rather than the operand.
#[allow(clippy::float_cmp)]
fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }

    let mut result = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    result
}
