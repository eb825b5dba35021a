//! Builder API for Moore machine definitions.
//!
//! This module provides the fluent [`MooreMachine`] builder, the
//! [`moore_machine!`](crate::moore_machine) macro, and the structural
//! [`validate`] check run before a definition is interpreted.

pub mod error;
pub mod machine;
pub mod macros;
pub mod validate;

pub use error::{DefinitionError, DefinitionErrorKind};
pub use machine::MooreMachine;
pub use validate::validate;
