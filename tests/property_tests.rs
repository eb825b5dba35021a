//! Property-based tests for machine interpretation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines and input sequences.

use moore::builder::{DefinitionErrorKind, MooreMachine};
use moore::interpreter::{Interpreter, InterpreterConfig};
use proptest::prelude::*;

const SYMBOLS: [&str; 3] = ["a", "b", "c"];

fn state_name(index: usize) -> String {
    format!("S{index}")
}

fn quiet() -> InterpreterConfig {
    InterpreterConfig::new().log_events(false)
}

prop_compose! {
    fn arbitrary_machine()(state_count in 1..6usize)(
        state_count in Just(state_count),
        edges in prop::collection::vec((0..state_count, 0..state_count, 0..SYMBOLS.len()), 0..12),
        initial in 0..state_count,
    ) -> MooreMachine<usize> {
        let mut machine = MooreMachine::new("Arbitrary");
        for index in 0..state_count {
            machine = machine.state(state_name(index), index);
        }
        for (source, target, symbol) in edges {
            machine = machine.transition(state_name(source), state_name(target), SYMBOLS[symbol]);
        }
        machine.initial(state_name(initial))
    }
}

fn arbitrary_inputs(max: usize) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 0..max)
}

proptest! {
    #[test]
    fn generated_machines_validate(machine in arbitrary_machine()) {
        prop_assert!(machine.validate().is_ok());
    }

    #[test]
    fn trace_has_one_more_output_than_inputs(
        machine in arbitrary_machine(),
        inputs in arbitrary_inputs(20),
    ) {
        let mut interpreter = Interpreter::with_config(&machine, quiet()).unwrap();
        let outputs = interpreter.trace(&inputs).unwrap();
        prop_assert_eq!(outputs.len(), inputs.len() + 1);
    }

    #[test]
    fn trace_is_compositional(
        machine in arbitrary_machine(),
        first in arbitrary_inputs(10),
        second in arbitrary_inputs(10),
    ) {
        let combined: Vec<&str> = first.iter().chain(second.iter()).copied().collect();
        let mut whole = Interpreter::with_config(&machine, quiet()).unwrap();
        let expected = whole.trace(&combined).unwrap();

        let mut head = Interpreter::with_config(&machine, quiet()).unwrap();
        let mut outputs = head.trace(&first).unwrap();

        // Fresh session starting where the first one stopped
        let resumed = machine.clone().initial(head.current_state());
        let mut tail = Interpreter::with_config(&resumed, quiet()).unwrap();
        outputs.extend(tail.trace(&second).unwrap().into_iter().skip(1));

        prop_assert_eq!(outputs, expected);
    }

    #[test]
    fn unknown_input_leaves_state_unchanged(
        machine in arbitrary_machine(),
        inputs in arbitrary_inputs(10),
    ) {
        let mut interpreter = Interpreter::with_config(&machine, quiet()).unwrap();
        interpreter.trace(&inputs).unwrap();

        let state = interpreter.current_state();
        let before = interpreter.current_output();
        let after = interpreter.step("never-used").unwrap();

        prop_assert_eq!(after, before);
        prop_assert_eq!(interpreter.current_state(), state);
    }

    #[test]
    fn interpretation_is_deterministic(
        machine in arbitrary_machine(),
        inputs in arbitrary_inputs(20),
    ) {
        let mut first = Interpreter::with_config(&machine, quiet()).unwrap();
        let mut second = Interpreter::with_config(&machine, quiet()).unwrap();

        prop_assert_eq!(first.trace(&inputs).unwrap(), second.trace(&inputs).unwrap());
    }

    #[test]
    fn outputs_follow_current_state(
        machine in arbitrary_machine(),
        inputs in arbitrary_inputs(20),
    ) {
        let mut interpreter = Interpreter::with_config(&machine, quiet()).unwrap();
        for input in inputs {
            let output = interpreter.step(input).unwrap();
            prop_assert_eq!(Some(&output), machine.output_of(interpreter.current_state()));
        }
    }

    #[test]
    fn undeclared_target_is_rejected(machine in arbitrary_machine(), source in 0..6usize) {
        let source = state_name(source % machine.state_count());
        let broken = machine.transition(source, "Undeclared", "a");

        let err = broken.validate().unwrap_err();
        prop_assert_eq!(err.kind(), DefinitionErrorKind::UndefinedTransitionTarget);
    }

    #[test]
    fn undeclared_source_is_rejected(machine in arbitrary_machine()) {
        let broken = machine.transition("Undeclared", state_name(0), "a");

        let err = broken.validate().unwrap_err();
        prop_assert_eq!(err.kind(), DefinitionErrorKind::UndefinedTransitionSource);
    }

    #[test]
    fn first_matching_transition_wins(
        machine in arbitrary_machine(),
        first in 0..6usize,
        second in 0..6usize,
    ) {
        let count = machine.state_count();
        let (first, second) = (first % count, second % count);
        let start = machine.initial_state().unwrap().to_string();
        let machine = machine
            .transition(start.clone(), state_name(first), "tie")
            .transition(start, state_name(second), "tie");

        let mut interpreter = Interpreter::with_config(&machine, quiet()).unwrap();
        let output = interpreter.step("tie").unwrap();

        prop_assert_eq!(output, first);
        prop_assert_eq!(interpreter.current_state(), state_name(first));
    }
}
