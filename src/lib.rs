//! # tapcalc - an event-driven scientific calculator engine
//!
//! tapcalc turns a stream of discrete input events (digit presses,
//! operators, unary functions, parentheses, memory keys) into a
//! correctly-sequenced evaluation with a running display, a history line,
//! and an operator highlight. Evaluation is strictly left to right; there
//! is no operator precedence, and parenthetical grouping is a one-level
//! save/restore per nesting depth rather than an expression tree.
//!
//! ## Core Concepts
//!
//! - **InputEvent**: the closed set of user actions the engine understands
//! - **Entry**: the operand being typed or displayed, with its digit-entry
//!   invariants and the distinguished division-by-zero marker
//! - **CalcEngine**: owner of all mutable state; applies events one at a time
//! - **Snapshot**: the observation record a presentation adapter renders
//!   after every event
//!
//! ## Usage
//!
//! ```rust
//! use tapcalc::{BinaryOp, CalcEngine, InputEvent};
//!
//! let mut engine = CalcEngine::new();
//! engine.apply(InputEvent::Digit(3)).unwrap();
//! engine.apply(InputEvent::Operator(BinaryOp::Add)).unwrap();
//! engine.apply(InputEvent::Digit(4)).unwrap();
//! let snapshot = engine.apply(InputEvent::Evaluate).unwrap();
//!
//! assert_eq!(snapshot.display, "7");
//! ```
//!
//! Adapters that receive raw keyboard input can translate keys first:
//!
//! ```rust
//! use tapcalc::{keymap, CalcEngine};
//!
//! let mut engine = CalcEngine::new();
//! for key in ["8", "*", "8", "Enter"] {
//!     if let Some(event) = keymap::event_for_key(key) {
//!         engine.apply(event).unwrap();
//!     }
//! }
//! assert_eq!(engine.display(), "64");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core vocabulary
pub mod entry;
pub mod error;
pub mod event;
pub mod format;
pub mod keymap;
pub mod ops;
pub mod snapshot;

// The state machine and its threaded runtime
pub mod engine;

// Re-export primary types at crate root for convenience
pub use engine::runtime::{CalcRuntime, CalcRuntimeConfig, EventHandle};
pub use engine::CalcEngine;
pub use entry::Entry;
pub use error::{CalcError, CalcResult};
pub use event::InputEvent;
pub use ops::{AngleMode, BinaryOp, Constant, DivideByZero, MemoryOp, UnaryOp};
pub use snapshot::Snapshot;
