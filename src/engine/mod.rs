//! The calculator input state machine.
//!
//! [`CalcEngine`] owns every piece of mutable state - the entry, the
//! pending operation, the awaiting flag, the group stack, the memory
//! accumulator, and the angle mode - and folds one [`InputEvent`] at a
//! time into it. Evaluation is strictly left to right; parenthetical
//! grouping saves and restores exactly one `(operand, operator)` pair per
//! nesting level rather than building an expression tree.

/// Threaded event runtime around a single engine.
pub mod runtime;

use tracing::{debug, trace};

use crate::entry::Entry;
use crate::error::{CalcError, CalcResult};
use crate::event::InputEvent;
use crate::format;
use crate::ops::{AngleMode, BinaryOp, Constant, MemoryOp, UnaryOp};
use crate::snapshot::Snapshot;

/// A saved left operand and its operator, awaiting the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    operand: f64,
    op: BinaryOp,
}

/// The calculator engine.
///
/// Single-threaded and synchronous: every [`apply`](Self::apply) runs to
/// completion before the next, and events take effect strictly in the
/// order they are applied. Construct one per session; [`reset`](Self::reset)
/// (the `Clear` event) restores the initial state but spares memory and
/// angle mode.
///
/// # Examples
///
/// ```
/// use tapcalc::{BinaryOp, CalcEngine, InputEvent};
///
/// let mut engine = CalcEngine::new();
/// engine.apply(InputEvent::Digit(8)).unwrap();
/// engine.apply(InputEvent::Operator(BinaryOp::Root)).unwrap();
/// engine.apply(InputEvent::Digit(3)).unwrap();
/// engine.apply(InputEvent::Evaluate).unwrap();
///
/// let cube_root: f64 = engine.display().parse().unwrap();
/// assert!((cube_root - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CalcEngine {
    entry: Entry,
    pending: Option<Pending>,
    awaiting_next: bool,
    active_op: Option<BinaryOp>,
    groups: Vec<Option<Pending>>,
    memory: f64,
    angle_mode: AngleMode,
}

impl CalcEngine {
    /// Creates an engine with all state at defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry: Entry::zero(),
            pending: None,
            awaiting_next: false,
            active_op: None,
            groups: Vec::new(),
            memory: 0.0,
            angle_mode: AngleMode::default(),
        }
    }

    /// Applies one input event and returns the post-event snapshot.
    ///
    /// Degraded arithmetic never errors here - division by zero and NaN
    /// surface as display states for the next input to overwrite.
    ///
    /// # Errors
    ///
    /// [`CalcError::DigitOutOfRange`] if a digit payload is outside
    /// `0..=9`; state is untouched in that case.
    pub fn apply(&mut self, event: InputEvent) -> CalcResult<Snapshot> {
        trace!(?event, "applying input event");
        match event {
            InputEvent::Digit(digit) => self.digit(digit)?,
            InputEvent::Decimal => self.decimal(),
            InputEvent::Operator(op) => self.operator(op),
            InputEvent::Unary(op) => self.unary(op),
            InputEvent::Constant(constant) => self.constant(constant),
            InputEvent::Memory(op) => self.memory_op(op),
            InputEvent::Evaluate => self.evaluate(),
            InputEvent::Clear => self.reset(),
            InputEvent::Backspace => self.entry.pop(),
            InputEvent::OpenGroup => self.open_group(),
            InputEvent::CloseGroup => self.close_group(),
            InputEvent::ToggleAngleMode => self.angle_mode = self.angle_mode.toggled(),
        }
        Ok(self.snapshot())
    }

    fn digit(&mut self, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::DigitOutOfRange { digit });
        }
        if self.awaiting_next {
            self.entry = Entry::fresh_digit(digit);
            self.awaiting_next = false;
            // The highlight drops as soon as the right-hand operand starts.
            self.active_op = None;
        } else {
            self.entry.push_digit(digit);
        }
        Ok(())
    }

    fn decimal(&mut self) {
        if self.awaiting_next {
            self.entry = Entry::fresh_decimal();
            self.awaiting_next = false;
            self.active_op = None;
        } else {
            self.entry.push_decimal();
        }
    }

    fn operator(&mut self, op: BinaryOp) {
        // A completed right-hand operand chains into the previous
        // operation first: strict left to right, no precedence.
        if self.pending.is_some() && !self.awaiting_next {
            self.evaluate();
        }
        let Some(operand) = self.entry.value() else {
            // The error marker has no operand to record.
            return;
        };
        self.pending = Some(Pending { operand, op });
        self.awaiting_next = true;
        self.active_op = Some(op);
    }

    fn evaluate(&mut self) {
        let Some(Pending { operand, op }) = self.pending else {
            return;
        };
        self.entry = match self.entry.value().map(|rhs| op.apply(operand, rhs)) {
            Some(Ok(value)) => Entry::Value(value),
            // Division by zero, or an error marker on the right-hand
            // side: the marker stands and the operation is discarded.
            Some(Err(_)) | None => Entry::Error,
        };
        debug!(display = %self.entry, "evaluated pending operation");
        self.pending = None;
        self.awaiting_next = true;
        self.active_op = None;
    }

    fn unary(&mut self, op: UnaryOp) {
        let Some(value) = self.entry.value() else {
            return;
        };
        self.entry = Entry::Value(op.apply(value, self.angle_mode));
        self.awaiting_next = true;
    }

    fn constant(&mut self, constant: Constant) {
        self.entry = Entry::Value(constant.value());
        self.awaiting_next = true;
    }

    fn memory_op(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory = 0.0,
            MemoryOp::Add => {
                if let Some(value) = self.entry.value() {
                    self.memory += value;
                }
            }
            MemoryOp::Subtract => {
                if let Some(value) = self.entry.value() {
                    self.memory -= value;
                }
            }
            MemoryOp::Recall => {
                self.entry = Entry::Value(self.memory);
                self.awaiting_next = true;
            }
        }
    }

    fn open_group(&mut self) {
        self.groups.push(self.pending.take());
        // The entry stays visible, but the sub-expression starts fresh:
        // the next digit replaces it rather than extending it.
        self.awaiting_next = true;
        self.active_op = None;
    }

    fn close_group(&mut self) {
        let Some(saved) = self.groups.pop() else {
            return;
        };
        // Collapse the in-group expression, restore the outer operation,
        // then fold the inner result into it.
        self.evaluate();
        self.pending = saved;
        self.evaluate();
    }

    /// Resets entry, pending operation, grouping, and highlight to the
    /// initial state. Memory and angle mode survive.
    pub fn reset(&mut self) {
        self.entry = Entry::zero();
        self.pending = None;
        self.awaiting_next = false;
        self.active_op = None;
        self.groups.clear();
    }

    /// Current display text (full precision; adapters apply
    /// [`format::fit_display`] when rendering).
    #[must_use]
    pub fn display(&self) -> String {
        self.entry.text()
    }

    /// Numeric value of the current entry, if it has one.
    #[must_use]
    pub fn entry_value(&self) -> Option<f64> {
        self.entry.value()
    }

    /// The pending-operation line, while an operation is pending.
    #[must_use]
    pub fn history(&self) -> Option<String> {
        self.pending
            .map(|pending| format!("{} {}", format::number(pending.operand), pending.op.symbol()))
    }

    /// The operator currently highlighted.
    #[must_use]
    pub const fn active_operator(&self) -> Option<BinaryOp> {
        self.active_op
    }

    /// Current angle mode.
    #[must_use]
    pub const fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Current memory accumulator.
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory
    }

    /// Number of open groups.
    #[must_use]
    pub fn group_depth(&self) -> usize {
        self.groups.len()
    }

    /// Builds the observation record for the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            history: self.history(),
            active_operator: self.active_op,
            angle_mode: self.angle_mode,
        }
    }
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self::new()
    }
}
