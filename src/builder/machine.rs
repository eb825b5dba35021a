//! Fluent builder and read accessors for Moore machine definitions.

use crate::builder::error::DefinitionError;
use crate::builder::validate::validate;
use crate::core::{MooreState, Transition};
use std::collections::HashMap;

/// Definition of a Moore machine, built with a fluent API.
///
/// Building never fails: names are accumulated as given and checked only
/// when the machine is validated (directly or by constructing an
/// [`Interpreter`](crate::interpreter::Interpreter)). This lets transitions
/// reference states that are declared later.
///
/// Redeclaring a state replaces its output but keeps its original position.
///
/// # Example
///
/// ```rust
/// use moore::builder::MooreMachine;
///
/// let machine = MooreMachine::new("Toggle")
///     .state("Off", "0")
///     .state("On", "1")
///     .transition("Off", "On", "press")
///     .transition("On", "Off", "press")
///     .initial("Off");
///
/// assert_eq!(machine.name(), "Toggle");
/// assert_eq!(machine.initial_state(), Some("Off"));
/// assert!(machine.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MooreMachine<O> {
    name: String,
    states: Vec<MooreState<O>>,
    index: HashMap<String, usize>,
    transitions: Vec<Transition>,
    initial: Option<String>,
}

impl<O> MooreMachine<O> {
    /// Create an empty machine definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            index: HashMap::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    /// Declare a state, or replace the output of an existing one.
    pub fn state(mut self, name: impl Into<String>, output: O) -> Self {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.states[position].set_output(output),
            None => {
                self.index.insert(name.clone(), self.states.len());
                self.states.push(MooreState::new(name, output));
            }
        }
        self
    }

    /// Append a transition from `source` to `target` on input `on`.
    pub fn transition(
        self,
        source: impl Into<String>,
        target: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        self.add_transition(Transition::new(source, target, on))
    }

    /// Append a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Append multiple transitions at once, preserving their order.
    pub fn transitions_from(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the initial state. The last call wins.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the initial state as recorded, whether or not it is declared.
    pub fn initial_state(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    /// Iterate `(name, output)` pairs in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &O)> + '_ {
        self.states.iter().map(|s| (s.name(), s.output()))
    }

    /// Number of declared states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Output of the named state, if declared.
    pub fn output_of(&self, name: &str) -> Option<&O> {
        self.index
            .get(name)
            .map(|&position| self.states[position].output())
    }

    /// Distinct input symbols used by transitions, in first-appearance order.
    pub fn input_alphabet(&self) -> Vec<&str> {
        let mut alphabet: Vec<&str> = Vec::new();
        for transition in &self.transitions {
            if !alphabet.contains(&transition.on.as_str()) {
                alphabet.push(&transition.on);
            }
        }
        alphabet
    }

    /// Check whether `input` is read by any transition.
    pub fn accepts_input(&self, input: &str) -> bool {
        self.transitions.iter().any(|t| t.on == input)
    }

    /// Position of the named state in declaration order.
    pub(crate) fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// State at a position previously returned by `position_of`.
    pub(crate) fn state_at(&self, position: usize) -> &MooreState<O> {
        &self.states[position]
    }

    /// Validate the definition. See [`validate`].
    pub fn validate(&self) -> Result<(), DefinitionError> {
        validate(self)
    }
}
