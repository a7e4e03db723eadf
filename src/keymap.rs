//! Keyboard support: translating key strings into input events.
//!
//! Covers the keyboard set of a calculator interface: digits, the four
//! basic operators, `Enter`/`=`, the decimal point, `Backspace`,
//! `Escape`/`c` for clear, and parentheses. Keys arrive as the strings a
//! UI toolkit reports (e.g. `KeyboardEvent.key`); unknown keys map to
//! `None` so adapters can ignore them without special cases.

use crate::event::InputEvent;
use crate::ops::BinaryOp;

/// Maps a key to the event it triggers, if any.
///
/// # Examples
///
/// ```
/// use tapcalc::{keymap, BinaryOp, InputEvent};
///
/// assert_eq!(keymap::event_for_key("7"), Some(InputEvent::Digit(7)));
/// assert_eq!(
///     keymap::event_for_key("/"),
///     Some(InputEvent::Operator(BinaryOp::Divide))
/// );
/// assert_eq!(keymap::event_for_key("Tab"), None);
/// ```
#[must_use]
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    match key {
        "+" => Some(InputEvent::Operator(BinaryOp::Add)),
        "-" => Some(InputEvent::Operator(BinaryOp::Subtract)),
        "*" => Some(InputEvent::Operator(BinaryOp::Multiply)),
        "/" => Some(InputEvent::Operator(BinaryOp::Divide)),
        "Enter" | "=" => Some(InputEvent::Evaluate),
        "." => Some(InputEvent::Decimal),
        "Backspace" => Some(InputEvent::Backspace),
        "Escape" | "c" | "C" => Some(InputEvent::Clear),
        "(" => Some(InputEvent::OpenGroup),
        ")" => Some(InputEvent::CloseGroup),
        _ => digit_key(key),
    }
}

fn digit_key(key: &str) -> Option<InputEvent> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_digit() => {
            Some(InputEvent::Digit(ch as u8 - b'0'))
        }
        _ => None,
    }
}
