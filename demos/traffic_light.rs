//! Traffic Light Moore Machine
//!
//! This example demonstrates a simple cyclic Moore machine.
//!
//! Key concepts:
//! - Outputs attached to states, not transitions
//! - Cyclic transitions on a single input
//! - DOT and Markdown renderings of the definition
//!
//! Run with: cargo run --example traffic_light

use moore::render::{to_dot, transition_table};
use moore::{Interpreter, MooreMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Traffic Light Moore Machine ===\n");

    let machine = MooreMachine::new("TrafficLight")
        .state("Red", "STOP")
        .state("Green", "GO")
        .state("Yellow", "SLOW")
        .transition("Red", "Green", "timer")
        .transition("Green", "Yellow", "timer")
        .transition("Yellow", "Red", "timer")
        .initial("Red");

    let mut interpreter = Interpreter::new(&machine).unwrap();
    let trace = interpreter
        .trace(["timer", "timer", "timer", "timer"])
        .unwrap();
    println!("Trace output: {:?}", trace);

    println!("\nDOT visualization:");
    println!("{}", to_dot(&machine));

    println!("Transition table:");
    println!("{}", transition_table(&machine));

    println!("\n=== Example Complete ===");
}
