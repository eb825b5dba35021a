//! Core Moore machine data model.
//!
//! This module contains the plain data the rest of the crate is built on:
//! - States with their associated outputs
//! - Transitions keyed by source state and input symbol
//! - Timestamped history of fired transitions
//!
//! Nothing in this module validates or interprets a machine; that happens
//! in [`crate::builder`] and [`crate::interpreter`].

mod history;
mod state;
mod transition;

pub use history::{StateHistory, StepRecord};
pub use state::MooreState;
pub use transition::Transition;
