//! Process (job) model.
//!
//! A process is the unit of CPU demand handed to a scheduling policy:
//! when it becomes eligible and how much CPU time it needs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable input to every policy. Policies copy it into their own
/// working state and never modify the caller's value.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time the process requires.
    pub burst: i64,
    /// Scheduling priority (lower = more urgent). Required by priority scheduling only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl ProcessSpec {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}
