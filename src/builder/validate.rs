//! Structural validation of machine definitions.

use crate::builder::error::DefinitionError;
use crate::builder::machine::MooreMachine;

/// Check that every name a machine references is a declared state.
///
/// The initial state is checked first, then transitions in insertion order,
/// source before target. Only the first problem found is reported, so the
/// same broken definition always yields the same error.
pub fn validate<O>(machine: &MooreMachine<O>) -> Result<(), DefinitionError> {
    let initial = machine
        .initial_state()
        .ok_or(DefinitionError::MissingInitialState)?;

    if !machine.contains_state(initial) {
        return Err(DefinitionError::UndefinedInitialState {
            name: initial.to_string(),
        });
    }

    for (index, transition) in machine.transitions().iter().enumerate() {
        if !machine.contains_state(&transition.source) {
            return Err(DefinitionError::UndefinedTransitionSource {
                index,
                name: transition.source.clone(),
                on: transition.on.clone(),
            });
        }
        if !machine.contains_state(&transition.target) {
            return Err(DefinitionError::UndefinedTransitionTarget {
                index,
                name: transition.target.clone(),
                on: transition.on.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::error::DefinitionErrorKind;

    #[test]
    fn accepts_fully_declared_machine() {
        let machine = MooreMachine::new("Toggle")
            .state("Off", "0")
            .state("On", "1")
            .transition("Off", "On", "press")
            .transition("On", "Off", "press")
            .initial("Off");

        assert!(validate(&machine).is_ok());
    }

    #[test]
    fn rejects_missing_initial_state() {
        let machine = MooreMachine::new("NoInit").state("A", "a");

        assert_eq!(validate(&machine), Err(DefinitionError::MissingInitialState));
    }

    #[test]
    fn rejects_undeclared_initial_state() {
        let machine = MooreMachine::new("BadInit").state("A", "Hello").initial("Z");

        let err = validate(&machine).unwrap_err();
        assert_eq!(err.kind(), DefinitionErrorKind::UndefinedInitialState);
        assert_eq!(
            err,
            DefinitionError::UndefinedInitialState {
                name: "Z".to_string()
            }
        );
    }

    #[test]
    fn rejects_undefined_source() {
        let machine = MooreMachine::new("BadSource")
            .state("A", "a")
            .transition("Ghost", "A", "go")
            .initial("A");

        let err = validate(&machine).unwrap_err();
        assert_eq!(err.kind(), DefinitionErrorKind::UndefinedTransitionSource);
    }

    #[test]
    fn rejects_undefined_target() {
        let machine = MooreMachine::new("Invalid")
            .state("A", "A")
            .transition("A", "B", "go")
            .initial("A");

        let err = validate(&machine).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::UndefinedTransitionTarget {
                index: 0,
                name: "B".to_string(),
                on: "go".to_string(),
            }
        );
    }

    #[test]
    fn initial_state_is_checked_before_transitions() {
        let machine = MooreMachine::new("Both")
            .state("A", "a")
            .transition("A", "Missing", "go")
            .initial("Nowhere");

        let err = validate(&machine).unwrap_err();
        assert_eq!(err.kind(), DefinitionErrorKind::UndefinedInitialState);
    }

    #[test]
    fn first_bad_transition_in_insertion_order_is_reported() {
        let machine = MooreMachine::new("Order")
            .state("A", "a")
            .transition("A", "A", "ok")
            .transition("A", "X", "first")
            .transition("Y", "A", "second")
            .initial("A");

        let err = validate(&machine).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::UndefinedTransitionTarget {
                index: 1,
                name: "X".to_string(),
                on: "first".to_string(),
            }
        );
    }

    #[test]
    fn source_is_checked_before_target_within_a_transition() {
        let machine = MooreMachine::new("Both")
            .state("A", "a")
            .transition("X", "Y", "go")
            .initial("A");

        let err = validate(&machine).unwrap_err();
        assert_eq!(err.kind(), DefinitionErrorKind::UndefinedTransitionSource);
    }

    #[test]
    fn states_declared_after_transitions_are_accepted() {
        let machine = MooreMachine::new("Late")
            .transition("A", "B", "go")
            .initial("A")
            .state("A", 1)
            .state("B", 2);

        assert!(validate(&machine).is_ok());
    }
}
