//! Text renderings of machine definitions.
//!
//! Renderers only read a [`MooreMachine`](crate::builder::MooreMachine)
//! through its public accessors. Outputs are shown with `Display`.

mod dot;
mod table;

pub use dot::to_dot;
pub use table::{state_table, transition_table};
