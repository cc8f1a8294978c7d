//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Demand-based**: SB (shortest burst), SRT (shortest remaining time)
//! - **Urgency**: PRIORITY (lower value first)
//! - **Order**: ARRIVAL (earliest arrival first)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::simulation::RuntimeProcess;

/// Shortest Burst.
///
/// Prioritizes processes with the smallest total CPU demand.
/// Primary key of non-preemptive SJF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SB"
    }

    fn evaluate(&self, process: &RuntimeProcess) -> RuleScore {
        process.spec.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Burst"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion. Primary key of SRTF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &RuntimeProcess) -> RuleScore {
        process.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Most urgent priority.
///
/// Lower priority value = more urgent. Processes without a priority
/// sort last; validation rejects them before priority scheduling runs.
#[derive(Debug, Clone, Copy)]
pub struct MostUrgent;

impl SelectionRule for MostUrgent {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &RuntimeProcess) -> RuleScore {
        process
            .spec
            .priority
            .map(RuleScore::from)
            .unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Most Urgent Priority"
    }
}

/// Earliest Arrival.
///
/// First-come order. Used as the primary key of FCFS ordering and as
/// the secondary key of every other policy.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, process: &RuntimeProcess) -> RuleScore {
        process.arrival()
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}
