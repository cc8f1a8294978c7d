//! Input validation for scheduling runs.
//!
//! Checks structural integrity of a process list before any simulation
//! step runs. Detects:
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive bursts
//! - Missing priorities (priority scheduling only)
//! - Makespan bounds that do not fit the time type
//!
//! All problems are reported together rather than stopping at the first.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requests zero or negative CPU time.
    NonPositiveBurst,
    /// Priority scheduling was requested for a process without a priority.
    MissingPriority,
    /// Latest arrival plus total burst exceeds the representable time range.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every arrival is non-negative
/// 3. Every burst is positive
/// 4. Every process has a priority, when `require_priority` is set
/// 5. `max(arrival) + sum(burst)` fits in `i64`
///
/// An empty list is valid here; emptiness is reported separately by the
/// scheduler because it is a different error class.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec], require_priority: bool) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }

        if require_priority && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            ));
        }
    }

    if makespan_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the makespan of any work-conserving schedule:
/// `max(arrival) + sum(burst)`.
///
/// Returns `None` when the bound does not fit in `i64`. Every clock value
/// and per-process duration of a run stays within this bound.
pub fn makespan_bound(processes: &[ProcessSpec]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |bound, p| bound.checked_add(p.burst))
}
