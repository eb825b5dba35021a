//! Synchronous hooks for observing interpreter steps.

use crate::core::{StateHistory, StepRecord};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;

/// What happened during one call to `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent<'a> {
    /// A transition fired and the machine moved to `to`.
    Transitioned {
        from: &'a str,
        on: &'a str,
        to: &'a str,
    },

    /// No transition reads `on` from `state`; the machine stayed put.
    Unmatched { state: &'a str, on: &'a str },
}

/// Receives step events synchronously, after the state update is applied.
///
/// Closures taking `&StepEvent` are observers:
///
/// ```rust
/// use moore::builder::MooreMachine;
/// use moore::interpreter::{Interpreter, StepEvent};
///
/// let machine = MooreMachine::new("Toggle")
///     .state("Off", 0)
///     .state("On", 1)
///     .transition("Off", "On", "press")
///     .initial("Off");
///
/// let mut fired = 0;
/// {
///     let mut interpreter = Interpreter::new(&machine)
///         .unwrap()
///         .with_observer(|event: &StepEvent<'_>| {
///             if matches!(event, StepEvent::Transitioned { .. }) {
///                 fired += 1;
///             }
///         });
///     interpreter.trace(["press", "press"]).unwrap();
/// }
/// assert_eq!(fired, 1);
/// ```
pub trait StepObserver {
    fn observe(&mut self, event: &StepEvent<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepEvent<'_>),
{
    fn observe(&mut self, event: &StepEvent<'_>) {
        self(event)
    }
}

/// Writes step events to `tracing`.
///
/// Fired transitions are logged at `info`, unmatched inputs at `debug`.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    machine: String,
}

impl TracingObserver {
    pub fn new(machine: impl Into<String>) -> Self {
        Self {
            machine: machine.into(),
        }
    }
}

impl StepObserver for TracingObserver {
    fn observe(&mut self, event: &StepEvent<'_>) {
        match *event {
            StepEvent::Transitioned { from, on, to } => {
                tracing::info!(
                    machine = %self.machine,
                    from,
                    on,
                    to,
                    "Transition: {from} --[{on}]--> {to}"
                );
            }
            StepEvent::Unmatched { state, on } => {
                tracing::debug!(
                    machine = %self.machine,
                    state,
                    on,
                    "No transition for '{on}' from '{state}'"
                );
            }
        }
    }
}

/// Records fired transitions into a shared [`StateHistory`].
///
/// Clones share the same history, so one clone can be handed to an
/// interpreter while another is kept to read the history.
#[derive(Debug, Clone, Default)]
pub struct HistoryRecorder {
    history: Arc<Mutex<StateHistory>>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the history recorded so far.
    pub fn snapshot(&self) -> StateHistory {
        self.history.lock().clone()
    }

    pub fn clear(&self) {
        *self.history.lock() = StateHistory::new();
    }
}

impl StepObserver for HistoryRecorder {
    fn observe(&mut self, event: &StepEvent<'_>) {
        if let StepEvent::Transitioned { from, on, to } = *event {
            let mut history = self.history.lock();
            *history = history.record(StepRecord {
                from: from.to_string(),
                on: on.to_string(),
                to: to.to_string(),
                timestamp: Utc::now(),
            });
        }
    }
}
