//! Serializable scheduling request.

use serde::{Deserialize, Serialize};

use super::{Policy, ScheduleOutcome, SchedulerEngine, SrtfStrategy};
use crate::error::SchedulingError;
use crate::models::ProcessSpec;

/// Input container for one scheduling run: processes plus configuration.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::ScheduleRequest;
///
/// let request = ScheduleRequest::from_json(r#"{
///     "policy": { "kind": "round_robin", "quantum": 2 },
///     "processes": [
///         { "id": "1", "arrival": 0, "burst": 5 },
///         { "id": "2", "arrival": 1, "burst": 3 }
///     ]
/// }"#).unwrap();
///
/// let outcome = request.run().unwrap();
/// assert_eq!(outcome.record("2").unwrap().completion, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessSpec>,
    /// Scheduling discipline.
    pub policy: Policy,
    /// SRTF time-advance strategy.
    #[serde(default)]
    pub srtf_strategy: SrtfStrategy,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<ProcessSpec>, policy: Policy) -> Self {
        Self {
            processes,
            policy,
            srtf_strategy: SrtfStrategy::default(),
        }
    }

    /// Sets the SRTF strategy.
    pub fn with_srtf_strategy(mut self, strategy: SrtfStrategy) -> Self {
        self.srtf_strategy = strategy;
        self
    }

    /// Parses a request from JSON.
    ///
    /// # Errors
    /// `MalformedRequest` if the text is not a valid request.
    pub fn from_json(json: &str) -> Result<Self, SchedulingError> {
        serde_json::from_str(json).map_err(|e| SchedulingError::MalformedRequest(e.to_string()))
    }

    /// Serializes the request to JSON.
    pub fn to_json(&self) -> Result<String, SchedulingError> {
        serde_json::to_string(self).map_err(|e| SchedulingError::MalformedRequest(e.to_string()))
    }

    /// Engine configured for this request.
    pub fn engine(&self) -> SchedulerEngine {
        SchedulerEngine::new(self.policy).with_srtf_strategy(self.srtf_strategy)
    }

    /// Runs the request.
    pub fn run(&self) -> Result<ScheduleOutcome, SchedulingError> {
        self.engine().run(&self.processes)
    }
}
