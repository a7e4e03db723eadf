//! Input event definitions.
//!
//! Every user action is a variant of [`InputEvent`] - a closed, tagged set
//! replacing string action tags with enum dispatch. Events carry their
//! payload (digit value, operator, function tag) and serialize as tagged
//! JSON so adapters can log, replay, or transport event streams.

use serde::{Deserialize, Serialize};

use crate::ops::{BinaryOp, Constant, MemoryOp, UnaryOp};

/// A single discrete user action delivered to the engine.
///
/// # Examples
///
/// ```
/// use tapcalc::{BinaryOp, InputEvent};
///
/// let event = InputEvent::Operator(BinaryOp::Divide);
/// let json = serde_json::to_string(&event).unwrap();
/// assert_eq!(json, r#"{"kind":"operator","payload":"divide"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit press; the payload must be in `0..=9`.
    Digit(u8),

    /// The decimal point.
    Decimal,

    /// A binary operator press.
    Operator(BinaryOp),

    /// A unary function press.
    Unary(UnaryOp),

    /// A constant press.
    Constant(Constant),

    /// A memory operation.
    Memory(MemoryOp),

    /// The equals key: evaluate the pending operation.
    Evaluate,

    /// All-clear: reset everything except memory and angle mode.
    Clear,

    /// Delete the last typed character.
    Backspace,

    /// Open a parenthesized group.
    OpenGroup,

    /// Close the innermost open group.
    CloseGroup,

    /// Flip between degrees and radians.
    ToggleAngleMode,
}

impl InputEvent {
    /// Returns true if this event begins or extends the typed entry.
    #[must_use]
    pub const fn is_entry_edit(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal | Self::Backspace)
    }
}
