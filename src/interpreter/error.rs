//! Errors raised while configuring or stepping an interpreter.

use thiserror::Error;

/// An input symbol was rejected before any transition was scanned.
///
/// Recoverable: the interpreter's current state is unchanged, so the
/// caller may retry with another symbol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Input symbol '{symbol}' is not read by any transition of machine '{machine}'")]
pub struct InvalidInputError {
    pub symbol: String,
    pub machine: String,
}

/// Errors that can occur when loading an [`InterpreterConfig`](super::InterpreterConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid interpreter configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
