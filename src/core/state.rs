//! Named states carrying a Moore output.

use serde::{Deserialize, Serialize};

/// A single state of a Moore machine.
///
/// The output is a property of the state alone: every time the machine
/// rests in this state, it emits `output`, regardless of which input
/// brought it there.
///
/// # Example
///
/// ```rust
/// use moore::core::MooreState;
///
/// let red = MooreState::new("Red", "STOP");
/// assert_eq!(red.name(), "Red");
/// assert_eq!(red.output(), &"STOP");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MooreState<O> {
    name: String,
    output: O,
}

impl<O> MooreState<O> {
    /// Create a state with the given name and output.
    pub fn new(name: impl Into<String>, output: O) -> Self {
        Self {
            name: name.into(),
            output,
        }
    }

    /// Get the state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the output emitted while the machine rests in this state.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Replace the output, keeping the name.
    pub(crate) fn set_output(&mut self, output: O) {
        self.output = output;
    }
}
