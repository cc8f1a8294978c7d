//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from the
//! records and timeline of a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Response | Mean(first dispatch - arrival) |
//! | Context Switches | Adjacent slices of different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::outcome::mean;
use crate::models::{ExecutionRecord, Timeline};

/// Scheduling performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of all bursts.
    pub total_burst: i64,
    /// Idle time within `[0, makespan)`.
    pub idle_time: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean turnaround.
    pub avg_turnaround: f64,
    /// Mean waiting.
    pub avg_waiting: f64,
    /// Mean response (first dispatch - arrival), from the timeline.
    pub avg_response: f64,
    /// Largest single waiting time.
    pub max_waiting: i64,
    /// Number of process-to-process switches.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a run's records and timeline.
    ///
    /// An empty input yields all-zero metrics.
    pub fn calculate(records: &[ExecutionRecord], timeline: &Timeline) -> Self {
        let makespan = records
            .iter()
            .map(|r| r.completion)
            .max()
            .unwrap_or(0)
            .max(timeline.makespan());
        let busy = timeline.busy_time();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy as f64 / makespan as f64,
                records.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let responses = records
            .iter()
            .filter_map(|r| timeline.first_dispatch(&r.id).map(|start| start - r.arrival));

        Self {
            makespan,
            total_burst: records.iter().map(|r| r.burst).sum(),
            idle_time: makespan - busy,
            cpu_utilization,
            throughput,
            avg_turnaround: mean(records.iter().map(|r| r.turnaround)).unwrap_or(0.0),
            avg_waiting: mean(records.iter().map(|r| r.waiting)).unwrap_or(0.0),
            avg_response: mean(responses).unwrap_or(0.0),
            max_waiting: records.iter().map(|r| r.waiting).max().unwrap_or(0),
            context_switches: timeline.context_switches(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting <= max_waiting && self.cpu_utilization >= min_utilization
    }
}
