//! History of fired transitions.
//!
//! Provides immutable tracking of the transitions an interpreter has taken,
//! following the same value-oriented style as the machine builder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use moore::core::StepRecord;
/// use chrono::Utc;
///
/// let record = StepRecord {
///     from: "Off".to_string(),
///     on: "press".to_string(),
///     to: "On".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "On");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The state the machine left
    pub from: String,
    /// The input symbol that fired the transition
    pub on: String,
    /// The state the machine entered
    pub to: String,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of fired transitions.
///
/// History is immutable - `record` returns a new history with the step
/// appended. Inputs that matched no transition are not recorded, since the
/// machine did not move.
///
/// # Example
///
/// ```rust
/// use moore::core::{StateHistory, StepRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StepRecord {
///         from: "Red".into(),
///         on: "timer".into(),
///         to: "Green".into(),
///         timestamp: Utc::now(),
///     })
///     .record(StepRecord {
///         from: "Green".into(),
///         on: "timer".into(),
///         to: "Yellow".into(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["Red", "Green", "Yellow"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    records: Vec<StepRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a fired transition, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, record: StepRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first recorded source, then the target of each record.
    /// Empty if nothing has fired yet.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Get the input symbols that fired transitions, in order.
    pub fn inputs(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.on.as_str()).collect()
    }

    /// Calculate total duration from first to last fired transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
