//! Toggle Switch
//!
//! The smallest useful Moore machine: two states flipped by one input.
//!
//! Key concepts:
//! - Declaring a machine with the `moore_machine!` macro
//! - Stepping one input at a time
//! - Unmatched inputs leave the machine where it is
//!
//! Run with: RUST_LOG=debug cargo run --example toggle

use moore::render::state_table;
use moore::{moore_machine, Interpreter};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Toggle Switch ===\n");

    let machine = moore_machine! {
        "Toggle" {
            states {
                Off => "0",
                On => "1",
            }
            transitions {
                Off -> On on press,
                On -> Off on press,
            }
            initial: Off
        }
    };

    println!("{}\n", state_table(&machine));

    let mut interpreter = Interpreter::new(&machine).unwrap();
    println!("Initial output: {}", interpreter.current_output());

    for input in ["press", "hold", "press", "press"] {
        let output = interpreter.step(input).unwrap();
        println!(
            "  {:<6} -> {} (output {})",
            input,
            interpreter.current_state(),
            output
        );
    }

    println!("\n=== Example Complete ===");
}
