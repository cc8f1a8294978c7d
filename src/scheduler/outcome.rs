//! Result of one scheduling run.

use serde::{Deserialize, Serialize};

use super::{Policy, ScheduleKpi};
use crate::error::SchedulingError;
use crate::models::{ExecutionRecord, Timeline};

/// Records, timeline and averages produced by a scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// One record per input process, in input order.
    pub records: Vec<ExecutionRecord>,
    /// Executed intervals.
    pub timeline: Timeline,
    /// Mean turnaround over all records.
    pub average_turnaround: f64,
    /// Mean waiting over all records.
    pub average_waiting: f64,
}

impl ScheduleOutcome {
    /// Assembles an outcome and computes its averages.
    ///
    /// # Errors
    /// `EmptyInput` when there are no records (the mean is undefined).
    pub fn new(
        policy: Policy,
        records: Vec<ExecutionRecord>,
        timeline: Timeline,
    ) -> Result<Self, SchedulingError> {
        let average_turnaround =
            mean(records.iter().map(|r| r.turnaround)).ok_or(SchedulingError::EmptyInput)?;
        let average_waiting =
            mean(records.iter().map(|r| r.waiting)).ok_or(SchedulingError::EmptyInput)?;

        Ok(Self {
            policy,
            records,
            timeline,
            average_turnaround,
            average_waiting,
        })
    }

    /// Finds the record for a process.
    pub fn record(&self, id: &str) -> Option<&ExecutionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Latest completion time.
    pub fn makespan(&self) -> i64 {
        self.records.iter().map(|r| r.completion).max().unwrap_or(0)
    }

    /// Sum of completion times (total flow, up to a constant).
    ///
    /// Widened to `i128`: each completion fits in `i64`, their sum may not.
    pub fn total_completion(&self) -> i128 {
        self.records.iter().map(|r| i128::from(r.completion)).sum()
    }

    /// Computes performance indicators for this outcome.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(&self.records, &self.timeline)
    }
}

/// Arithmetic mean; `None` for an empty sequence.
pub(crate) fn mean(values: impl Iterator<Item = i64>) -> Option<f64> {
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| (s + i128::from(v), c + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn record(id: &str, arrival: i64, burst: i64, completion: i64) -> ExecutionRecord {
        ExecutionRecord::new(&ProcessSpec::new(id, arrival, burst), None, completion)
    }

    #[test]
    fn test_averages() {
        let records = vec![record("A", 0, 2, 2), record("B", 0, 3, 5)];
        let outcome = ScheduleOutcome::new(Policy::Fcfs, records, Timeline::new()).unwrap();

        assert!((outcome.average_turnaround - 3.5).abs() < 1e-10);
        assert!((outcome.average_waiting - 1.0).abs() < 1e-10);
        assert_eq!(outcome.makespan(), 5);
        assert_eq!(outcome.total_completion(), 7);
    }

    #[test]
    fn test_averages_over_large_times() {
        let big = i64::MAX / 2;
        let records = vec![record("A", 0, big, big), record("B", 0, 1, big + 1)];
        let outcome = ScheduleOutcome::new(Policy::Fcfs, records, Timeline::new()).unwrap();

        assert_eq!(outcome.total_completion(), 2 * i128::from(big) + 1);
        assert!(outcome.average_turnaround > big as f64 * 0.99);
    }

    #[test]
    fn test_empty_outcome_rejected() {
        let err = ScheduleOutcome::new(Policy::Fcfs, vec![], Timeline::new()).unwrap_err();
        assert_eq!(err, SchedulingError::EmptyInput);
    }

    #[test]
    fn test_record_lookup() {
        let records = vec![record("A", 0, 5, 9), record("B", 0, 1, 1), record("C", 0, 3, 4)];
        let outcome = ScheduleOutcome::new(Policy::Sjf, records, Timeline::new()).unwrap();

        assert_eq!(outcome.record("C").unwrap().completion, 4);
        assert!(outcome.record("Z").is_none());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([].into_iter()), None);
        assert_eq!(mean([1, 2, 3, 4].into_iter()), Some(2.5));
    }

    #[test]
    fn test_outcome_json_round_trip() {
        let records = vec![record("A", 0, 2, 2)];
        let outcome = ScheduleOutcome::new(Policy::RoundRobin { quantum: 4 }, records, Timeline::new())
            .unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: ScheduleOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
