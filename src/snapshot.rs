//! The observation record returned after every input event.
//!
//! A flat display value is not enough for a calculator front end: it also
//! renders the pending-operation history line, highlights the active
//! operator, and labels the angle mode. [`Snapshot`] carries all four so
//! an adapter can redraw from one value.

use serde::{Deserialize, Serialize};

use crate::entry::ERROR_TEXT;
use crate::format;
use crate::ops::{AngleMode, BinaryOp};

/// What a presentation adapter needs after an event.
///
/// Returned by [`CalcEngine::apply`](crate::CalcEngine::apply); the same
/// data is available piecemeal from the engine's accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Full-precision display text, or the error marker.
    pub display: String,

    /// The pending-operation line, `"<operand> <symbol>"`, while an
    /// operation is awaiting its right-hand side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,

    /// The operator to highlight; at most one at a time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_operator: Option<BinaryOp>,

    /// The current angle mode.
    pub angle_mode: AngleMode,
}

impl Snapshot {
    /// Returns true if the display shows the division-by-zero marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    /// The display text after the presentation fitting rule
    /// ([`format::fit_display`]).
    #[must_use]
    pub fn fitted_display(&self) -> String {
        format::fit_display(&self.display)
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.history {
            Some(history) => write!(f, "{history} {}", self.display),
            None => write!(f, "{}", self.display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            display: "7".to_string(),
            history: Some("3 +".to_string()),
            active_operator: Some(BinaryOp::Add),
            angle_mode: AngleMode::Degrees,
        }
    }

    #[test]
    fn test_error_predicate() {
        let mut snapshot = sample();
        assert!(!snapshot.is_error());
        snapshot.display = ERROR_TEXT.to_string();
        assert!(snapshot.is_error());
    }

    #[test]
    fn test_fitted_display() {
        let mut snapshot = sample();
        snapshot.display = "0.3333333333333333".to_string();
        assert_eq!(snapshot.fitted_display(), "0.333333");
        assert_eq!(sample().fitted_display(), "7");
    }

    #[test]
    fn test_display_impl() {
        assert_eq!(sample().to_string(), "3 + 7");

        let mut snapshot = sample();
        snapshot.history = None;
        assert_eq!(snapshot.to_string(), "7");
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let mut snapshot = sample();
        snapshot.history = None;
        snapshot.active_operator = None;
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"display":"7","angle_mode":"degrees"}"#);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
