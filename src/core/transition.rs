//! Transitions between named states.

use serde::{Deserialize, Serialize};

/// A rule moving the machine from `source` to `target` when `on` is read.
///
/// Names are not checked against any state set here; a transition may
/// reference states that are declared later (or never, in which case
/// validation rejects the machine).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub source: String,
    pub target: String,
    pub on: String,
}

impl Transition {
    /// Create a transition from `source` to `target` on input `on`.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        on: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            on: on.into(),
        }
    }

    /// Check if this transition fires for `input` while in `current` (pure).
    pub fn matches(&self, current: &str, input: &str) -> bool {
        self.source == current && self.on == input
    }
}
