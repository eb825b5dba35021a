//! Definition errors reported when validating a machine.

use thiserror::Error;

/// Structural problems in a machine definition.
///
/// Raised by [`validate`](crate::builder::validate()) and therefore by
/// [`Interpreter::new`](crate::interpreter::Interpreter::new). Each variant
/// names the offending state and the role it plays so the definition can be
/// fixed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Initial state not specified. Call .initial(state) before interpreting")]
    MissingInitialState,

    #[error("Initial state '{name}' is not a declared state")]
    UndefinedInitialState { name: String },

    #[error("Transition #{index} on '{on}' has undefined source state '{name}'")]
    UndefinedTransitionSource {
        index: usize,
        name: String,
        on: String,
    },

    #[error("Transition #{index} on '{on}' has undefined target state '{name}'")]
    UndefinedTransitionTarget {
        index: usize,
        name: String,
        on: String,
    },
}

/// Coarse classification of a [`DefinitionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionErrorKind {
    UndefinedInitialState,
    UndefinedTransitionSource,
    UndefinedTransitionTarget,
}

impl DefinitionError {
    /// Which role the undefined name played.
    ///
    /// A machine with no initial state at all is reported as
    /// [`DefinitionErrorKind::UndefinedInitialState`].
    pub fn kind(&self) -> DefinitionErrorKind {
        match self {
            Self::MissingInitialState | Self::UndefinedInitialState { .. } => {
                DefinitionErrorKind::UndefinedInitialState
            }
            Self::UndefinedTransitionSource { .. } => DefinitionErrorKind::UndefinedTransitionSource,
            Self::UndefinedTransitionTarget { .. } => DefinitionErrorKind::UndefinedTransitionTarget,
        }
    }
}
