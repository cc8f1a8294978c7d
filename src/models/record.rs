//! Execution record (per-process result).

use serde::{Deserialize, Serialize};

use super::ProcessSpec;

/// Outcome of one process after a scheduling run.
///
/// Created once, when the process retires. Turnaround and waiting are
/// derived from completion, arrival and the original burst only, so they
/// are meaningful for every policy whether or not `start` is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Process identifier.
    pub id: String,
    /// Arrival time copied from the input.
    pub arrival: i64,
    /// Original burst copied from the input.
    pub burst: i64,
    /// Priority copied from the input, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Dispatch time for run-to-completion policies.
    ///
    /// `None` for preemptive policies (SRTF, Round Robin), which only
    /// track completion. Use `Timeline::first_dispatch` for those.
    pub start: Option<i64>,
    /// Completion time.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`.
    pub waiting: i64,
}

impl ExecutionRecord {
    /// Builds the record for a retired process.
    pub fn new(spec: &ProcessSpec, start: Option<i64>, completion: i64) -> Self {
        let turnaround = completion - spec.arrival;
        Self {
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            priority: spec.priority,
            start,
            completion,
            turnaround,
            waiting: turnaround - spec.burst,
        }
    }

    /// Response time (`start - arrival`), when the dispatch time is recorded.
    pub fn response(&self) -> Option<i64> {
        self.start.map(|s| s - self.arrival)
    }
}
