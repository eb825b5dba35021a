//! Graphviz DOT rendering.

use crate::builder::MooreMachine;
use std::fmt::{Display, Write};

/// Render a machine as Graphviz DOT source.
///
/// Each state becomes a node labelled with its name and output, each
/// transition an edge labelled with its input symbol. When an initial state
/// is recorded, a point-shaped `__start` node points at it.
///
/// # Example
///
/// ```rust
/// use moore::builder::MooreMachine;
/// use moore::render::to_dot;
///
/// let machine = MooreMachine::new("DotTest")
///     .state("A", "a")
///     .state("B", "b")
///     .transition("A", "B", "go")
///     .initial("A");
///
/// let dot = to_dot(&machine);
/// assert!(dot.starts_with("digraph \"DotTest\" {"));
/// assert!(dot.contains("\"A\" -> \"B\" [label=\"go\"];"));
/// ```
pub fn to_dot<O: Display>(machine: &MooreMachine<O>) -> String {
    let mut dot = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(dot, "digraph {} {{", quote(machine.name()));
    let _ = writeln!(dot, "    rankdir=LR;");

    if let Some(initial) = machine.initial_state() {
        let _ = writeln!(dot, "    __start [shape=point];");
        let _ = writeln!(dot, "    __start -> {};", quote(initial));
    }

    for (name, output) in machine.states() {
        let label = format!("{name}\n{output}");
        let _ = writeln!(dot, "    {} [label={}];", quote(name), quote(&label));
    }

    for transition in machine.transitions() {
        let _ = writeln!(
            dot,
            "    {} -> {} [label={}];",
            quote(&transition.source),
            quote(&transition.target),
            quote(&transition.on)
        );
    }

    dot.push('}');
    dot.push('\n');
    dot
}

/// Quote a DOT identifier, escaping quotes, backslashes and newlines.
fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
