//! Scheduling policies, the engine that runs them, and result metrics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection | Stepping |
//! |--------|-----------|-----------|----------|
//! | FCFS | no | arrival order | burst jumps |
//! | SJF | no | shortest burst | burst jumps |
//! | SRTF | yes | shortest remaining | unit ticks (or event jumps) |
//! | Priority | no | lowest priority value | burst jumps |
//! | Round Robin | yes | FIFO | quantum jumps |
//!
//! Every policy breaks remaining ties by earliest arrival, then by
//! position in the input.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod kpi;
mod nonpreemptive;
mod outcome;
mod request;
mod round_robin;
mod srtf;

#[cfg(test)]
mod properties;

pub use kpi::ScheduleKpi;
pub use outcome::ScheduleOutcome;
pub use request::ScheduleRequest;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::dispatching::RuleEngine;
use crate::error::SchedulingError;
use crate::models::ProcessSpec;
use crate::simulation::{RecordStart, SimulationState};
use crate::validation::validate_processes;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Priority (lower value = more urgent), non-preemptive.
    Priority,
    /// Round Robin with a fixed quantum.
    RoundRobin {
        /// Maximum contiguous slice per dispatch. Must be positive.
        quantum: i64,
    },
}

impl Policy {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Run-to-completion policies record their dispatch time; preemptive
    /// ones only track completion.
    fn record_start(&self) -> RecordStart {
        if self.is_preemptive() {
            RecordStart::Omitted
        } else {
            RecordStart::Dispatch
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (q={quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// How SRTF advances time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SrtfStrategy {
    /// Re-evaluate every time unit.
    #[default]
    UnitTick,
    /// Jump straight to the next arrival or completion.
    EventDriven,
}

/// Runs a scheduling policy over a process list.
///
/// Each call owns its own simulation state; the engine itself holds only
/// configuration and may be shared freely.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::{Policy, SchedulerEngine};
///
/// let processes = vec![
///     ProcessSpec::new("1", 0, 5),
///     ProcessSpec::new("2", 2, 3),
///     ProcessSpec::new("3", 4, 1),
///     ProcessSpec::new("4", 6, 2),
/// ];
/// let outcome = SchedulerEngine::new(Policy::Fcfs).run(&processes).unwrap();
///
/// assert_eq!(outcome.record("4").unwrap().completion, 11);
/// assert!((outcome.average_waiting - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerEngine {
    policy: Policy,
    srtf_strategy: SrtfStrategy,
}

impl SchedulerEngine {
    /// Creates an engine for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            srtf_strategy: SrtfStrategy::default(),
        }
    }

    /// Sets the SRTF time-advance strategy (ignored by other policies).
    pub fn with_srtf_strategy(mut self, strategy: SrtfStrategy) -> Self {
        self.srtf_strategy = strategy;
        self
    }

    /// Configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Configured SRTF strategy.
    pub fn srtf_strategy(&self) -> SrtfStrategy {
        self.srtf_strategy
    }

    /// Checks configuration and input without simulating.
    ///
    /// Order: quantum, empty input, process list. The process-list check
    /// includes the makespan bound, so a run that passes never overflows
    /// its clock.
    pub fn validate(&self, processes: &[ProcessSpec]) -> Result<(), SchedulingError> {
        if let Policy::RoundRobin { quantum } = self.policy {
            if quantum <= 0 {
                return Err(SchedulingError::InvalidQuantum(quantum));
            }
        }
        if processes.is_empty() {
            return Err(SchedulingError::EmptyInput);
        }
        validate_processes(processes, self.policy.requires_priority())
            .map_err(SchedulingError::InvalidProcesses)
    }

    /// Simulates the policy and returns one record per process.
    ///
    /// # Errors
    /// Any error from [`validate`](Self::validate); nothing is simulated
    /// when validation fails.
    pub fn run(&self, processes: &[ProcessSpec]) -> Result<ScheduleOutcome, SchedulingError> {
        self.validate(processes)?;

        let mut state = SimulationState::new(processes, self.policy.record_start());
        match self.policy {
            Policy::Fcfs => fcfs::run(&mut state),
            Policy::Sjf => nonpreemptive::run(&mut state, &RuleEngine::shortest_job()),
            Policy::Priority => nonpreemptive::run(&mut state, &RuleEngine::priority()),
            Policy::Srtf => match self.srtf_strategy {
                SrtfStrategy::UnitTick => srtf::run_unit_tick(&mut state),
                SrtfStrategy::EventDriven => srtf::run_event_driven(&mut state),
            },
            Policy::RoundRobin { quantum } => round_robin::run(&mut state, quantum),
        }

        let (records, timeline) = state.finish()?;
        let outcome = ScheduleOutcome::new(self.policy, records, timeline)?;

        info!(
            policy = %self.policy,
            processes = outcome.records.len(),
            makespan = outcome.makespan(),
            average_turnaround = outcome.average_turnaround,
            average_waiting = outcome.average_waiting,
            "Scheduling run complete"
        );
        Ok(outcome)
    }
}

/// Runs First-Come-First-Served.
pub fn fcfs(processes: &[ProcessSpec]) -> Result<ScheduleOutcome, SchedulingError> {
    SchedulerEngine::new(Policy::Fcfs).run(processes)
}

/// Runs non-preemptive Shortest-Job-First.
pub fn sjf(processes: &[ProcessSpec]) -> Result<ScheduleOutcome, SchedulingError> {
    SchedulerEngine::new(Policy::Sjf).run(processes)
}

/// Runs Shortest-Remaining-Time-First with unit ticks.
pub fn srtf(processes: &[ProcessSpec]) -> Result<ScheduleOutcome, SchedulingError> {
    SchedulerEngine::new(Policy::Srtf).run(processes)
}

/// Runs non-preemptive priority scheduling.
pub fn priority(processes: &[ProcessSpec]) -> Result<ScheduleOutcome, SchedulingError> {
    SchedulerEngine::new(Policy::Priority).run(processes)
}

/// Runs Round Robin with the given quantum.
pub fn round_robin(
    processes: &[ProcessSpec],
    quantum: i64,
) -> Result<ScheduleOutcome, SchedulingError> {
    SchedulerEngine::new(Policy::RoundRobin { quantum }).run(processes)
}
