//! Interpreting Moore machine definitions against input sequences.
//!
//! An [`Interpreter`] borrows a validated [`MooreMachine`] and owns the only
//! runtime state: which state the machine is currently in. Any number of
//! interpreters may share one definition, each advancing independently.
//!
//! # Stepping
//!
//! `step` scans transitions in insertion order and takes the first one whose
//! source is the current state and whose input matches. If none matches the
//! machine stays where it is; that is normal behavior, not an error. Either
//! way the returned value is the output of the state after the step.
//!
//! # Observability
//!
//! Every step produces a [`StepEvent`] delivered to the registered
//! [`StepObserver`]s. With the default configuration a [`TracingObserver`]
//! is installed; nothing else is logged.

mod config;
mod error;
mod observer;

pub use config::{InputPolicy, InterpreterConfig};
pub use error::{ConfigError, InvalidInputError};
pub use observer::{HistoryRecorder, StepEvent, StepObserver, TracingObserver};

use crate::builder::{DefinitionError, MooreMachine};
use std::fmt;

/// Runs a [`MooreMachine`] one input symbol at a time.
///
/// # Example
///
/// ```rust
/// use moore::builder::MooreMachine;
/// use moore::interpreter::Interpreter;
///
/// let machine = MooreMachine::new("TrafficLight")
///     .state("Red", "STOP")
///     .state("Green", "GO")
///     .state("Yellow", "SLOW")
///     .transition("Red", "Green", "timer")
///     .transition("Green", "Yellow", "timer")
///     .transition("Yellow", "Red", "timer")
///     .initial("Red");
///
/// let mut interpreter = Interpreter::new(&machine).unwrap();
/// let outputs = interpreter.trace(["timer", "timer", "timer", "timer"]).unwrap();
/// assert_eq!(outputs, vec!["STOP", "GO", "SLOW", "STOP", "GO"]);
/// ```
pub struct Interpreter<'m, O> {
    machine: &'m MooreMachine<O>,
    current: usize,
    config: InterpreterConfig,
    observers: Vec<Box<dyn StepObserver + Send + 'm>>,
}

impl<'m, O> Interpreter<'m, O> {
    /// Validate `machine` and start in its initial state, with the default
    /// configuration.
    pub fn new(machine: &'m MooreMachine<O>) -> Result<Self, DefinitionError> {
        Self::with_config(machine, InterpreterConfig::default())
    }

    /// Validate `machine` and start in its initial state.
    ///
    /// Fails with the first [`DefinitionError`] found; no interpreter is
    /// produced for an invalid definition.
    pub fn with_config(
        machine: &'m MooreMachine<O>,
        config: InterpreterConfig,
    ) -> Result<Self, DefinitionError> {
        machine.validate()?;

        let initial = machine
            .initial_state()
            .ok_or(DefinitionError::MissingInitialState)?;
        let current =
            machine
                .position_of(initial)
                .ok_or_else(|| DefinitionError::UndefinedInitialState {
                    name: initial.to_string(),
                })?;

        let mut observers: Vec<Box<dyn StepObserver + Send + 'm>> = Vec::new();
        if config.log_events {
            observers.push(Box::new(TracingObserver::new(machine.name())));
        }

        Ok(Self {
            machine,
            current,
            config,
            observers,
        })
    }

    /// Register an additional observer.
    pub fn with_observer<T>(mut self, observer: T) -> Self
    where
        T: StepObserver + Send + 'm,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Name of the state the machine is in.
    pub fn current_state(&self) -> &'m str {
        self.machine.state_at(self.current).name()
    }

    /// The definition this interpreter runs.
    pub fn machine(&self) -> &'m MooreMachine<O> {
        self.machine
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Borrow the output of the current state.
    pub fn current_output_ref(&self) -> &'m O {
        self.machine.state_at(self.current).output()
    }

    fn check_input(&self, input: &str) -> Result<(), InvalidInputError> {
        match self.config.input_policy {
            InputPolicy::Any => Ok(()),
            InputPolicy::DeclaredOnly if self.machine.accepts_input(input) => Ok(()),
            InputPolicy::DeclaredOnly => Err(InvalidInputError {
                symbol: input.to_string(),
                machine: self.machine.name().to_string(),
            }),
        }
    }

    /// Take the first matching transition, if any, and notify observers.
    fn advance(&mut self, input: &str) {
        let machine = self.machine;
        let from = machine.state_at(self.current).name();

        let fired = machine
            .transitions()
            .iter()
            .find(|t| t.matches(from, input))
            .and_then(|t| machine.position_of(&t.target).map(|target| (t, target)));

        let event = match fired {
            Some((transition, target)) => {
                self.current = target;
                StepEvent::Transitioned {
                    from,
                    on: &transition.on,
                    to: &transition.target,
                }
            }
            None => StepEvent::Unmatched {
                state: from,
                on: input,
            },
        };

        for observer in &mut self.observers {
            observer.observe(&event);
        }
    }
}

impl<'m, O: Clone> Interpreter<'m, O> {
    /// Output of the current state.
    pub fn current_output(&self) -> O {
        self.current_output_ref().clone()
    }

    /// Feed one input symbol and return the output after the step.
    ///
    /// On [`InvalidInputError`] nothing is scanned and the current state is
    /// unchanged.
    pub fn step(&mut self, input: &str) -> Result<O, InvalidInputError> {
        self.check_input(input)?;
        self.advance(input);
        Ok(self.current_output())
    }

    /// Feed a sequence of input symbols.
    ///
    /// Returns the output before the first symbol followed by the output
    /// after each symbol, so the result has one more element than the
    /// input. The interpreter is left in the final state; calling `trace`
    /// again continues from there.
    ///
    /// Every symbol is checked before any is applied, so a rejected trace
    /// leaves the current state unchanged.
    pub fn trace<I, S>(&mut self, inputs: I) -> Result<Vec<O>, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let inputs: Vec<S> = inputs.into_iter().collect();
        for input in &inputs {
            self.check_input(input.as_ref())?;
        }

        let mut outputs = Vec::with_capacity(inputs.len() + 1);
        outputs.push(self.current_output());
        for input in &inputs {
            self.advance(input.as_ref());
            outputs.push(self.current_output());
        }
        Ok(outputs)
    }
}

impl<O: fmt::Debug> fmt::Debug for Interpreter<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("machine", &self.machine.name())
            .field("current_state", &self.current_state())
            .field("current_output", self.current_output_ref())
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}
