//! Caller-supplied interpreter configuration.

use crate::interpreter::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Which input symbols `step` and `trace` accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Every symbol is accepted; unknown symbols simply match no transition.
    #[default]
    Any,

    /// Only symbols read by at least one transition are accepted.
    DeclaredOnly,
}

/// Configuration passed explicitly to
/// [`Interpreter::with_config`](super::Interpreter::with_config).
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use moore::interpreter::{InputPolicy, InterpreterConfig};
///
/// let config = InterpreterConfig::from_json(r#"{ "input_policy": "declared_only" }"#).unwrap();
/// assert_eq!(config.input_policy, InputPolicy::DeclaredOnly);
/// assert!(config.log_events);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub input_policy: InputPolicy,

    /// Install a [`TracingObserver`](super::TracingObserver) on construction.
    pub log_events: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            input_policy: InputPolicy::Any,
            log_events: true,
        }
    }
}

impl InterpreterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input policy
    pub fn input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Enable or disable the tracing observer
    pub fn log_events(mut self, enabled: bool) -> Self {
        self.log_events = enabled;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
