//! Scheduling error taxonomy.
//!
//! Every error is raised before the first simulation step, except
//! `HorizonExceeded`, which guards the SRTF loop bound.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by a scheduling run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// No processes were supplied; averages over zero records are undefined.
    #[error("No processes supplied: averages are undefined")]
    EmptyInput,

    /// Round Robin quantum is zero or negative.
    #[error("Invalid time quantum {0}: must be positive")]
    InvalidQuantum(i64),

    /// The process list failed validation.
    #[error("Invalid process list: {}", join_messages(.0))]
    InvalidProcesses(Vec<ValidationError>),

    /// A serialized schedule request could not be parsed.
    #[error("Malformed schedule request: {0}")]
    MalformedRequest(String),

    /// The simulation clock passed `max(arrival) + sum(burst)` with work left.
    #[error("Simulation exceeded its horizon of {horizon} time units")]
    HorizonExceeded {
        /// Upper bound on the makespan.
        horizon: i64,
    },
}

impl SchedulingError {
    /// Whether this error belongs to the configuration class
    /// (bad parameter or malformed input, detected before simulation).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantum(_) | Self::InvalidProcesses(_) | Self::MalformedRequest(_)
        )
    }

    /// Validation errors carried by `InvalidProcesses`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidProcesses(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
