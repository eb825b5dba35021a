//! Elevator Controller
//!
//! This example demonstrates a session that spans several traces, with a
//! history recorder and a strict input policy.
//!
//! Key concepts:
//! - `trace` continues from wherever the previous call stopped
//! - Recording fired transitions with `HistoryRecorder`
//! - Rejecting undeclared inputs with `InputPolicy::DeclaredOnly`
//!
//! Run with: cargo run --example elevator

use moore::{HistoryRecorder, InputPolicy, Interpreter, InterpreterConfig, MooreMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("=== Elevator Controller ===\n");

    let machine = MooreMachine::new("Elevator")
        .state("Idle", "IDLE")
        .state("MovingUp", "UP")
        .state("MovingDown", "DOWN")
        .state("DoorOpen", "OPEN")
        .transition("Idle", "MovingUp", "up")
        .transition("Idle", "MovingDown", "down")
        .transition("MovingUp", "DoorOpen", "arrived")
        .transition("MovingDown", "DoorOpen", "arrived")
        .transition("DoorOpen", "Idle", "close")
        .initial("Idle");

    let config = InterpreterConfig::new().input_policy(InputPolicy::DeclaredOnly);
    let recorder = HistoryRecorder::new();
    let mut interpreter = Interpreter::with_config(&machine, config)
        .unwrap()
        .with_observer(recorder.clone());

    println!("First ride:  {:?}", interpreter.trace(["up", "arrived", "close"]).unwrap());
    println!(
        "Second ride: {:?}",
        interpreter.trace(["down", "arrived", "close"]).unwrap()
    );

    match interpreter.step("teleport") {
        Ok(output) => println!("Unexpected output: {output}"),
        Err(e) => println!("Rejected: {e}"),
    }
    println!("Still in: {}", interpreter.current_state());

    let history = recorder.snapshot();
    println!("\nPath taken: {}", history.get_path().join(" -> "));
    println!("Transitions fired: {}", history.len());

    println!("\n=== Example Complete ===");
}
