//! Moore: a deterministic Moore machine builder and interpreter
//!
//! A Moore machine emits an output that depends only on its current state.
//! This crate separates the static definition of such a machine from the
//! runtime that walks it:
//!
//! # Core Concepts
//!
//! - **Definition**: states with outputs, transitions keyed by
//!   (source, input) and an initial state, built with [`MooreMachine`]
//! - **Validation**: every referenced name must be a declared state,
//!   checked once before interpretation
//! - **Interpreter**: owns the current state and advances it one input
//!   symbol at a time; first matching transition wins, no match means
//!   the machine stays put
//! - **Rendering**: DOT and Markdown views built from the read accessors
//!
//! # Example
//!
//! ```rust
//! use moore::{Interpreter, MooreMachine};
//!
//! let machine = MooreMachine::new("Toggle")
//!     .state("Off", "0")
//!     .state("On", "1")
//!     .transition("Off", "On", "press")
//!     .transition("On", "Off", "press")
//!     .initial("Off");
//!
//! let mut interpreter = Interpreter::new(&machine).unwrap();
//! let outputs = interpreter.trace(["press", "press", "press"]).unwrap();
//! assert_eq!(outputs, vec!["0", "1", "0", "1"]);
//! ```

pub mod builder;
pub mod core;
pub mod interpreter;
pub mod render;

// Re-export commonly used types
pub use crate::builder::{DefinitionError, DefinitionErrorKind, MooreMachine};
pub use crate::core::{MooreState, StateHistory, StepRecord, Transition};
pub use crate::interpreter::{
    HistoryRecorder, InputPolicy, Interpreter, InterpreterConfig, InvalidInputError, StepEvent,
    StepObserver,
};
