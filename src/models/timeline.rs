//! Execution timeline (Gantt trace).
//!
//! A timeline is the ordered list of intervals during which the CPU ran a
//! given process. Gaps between slices are idle time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The executed-interval trace of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Executed slices in time order.
    pub slices: Vec<Slice>,
}

/// A contiguous interval `[start, end)` during which one process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that ran.
    pub process_id: String,
    /// Start of the interval.
    pub start: i64,
    /// End of the interval (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an executed interval.
    ///
    /// A slice that continues the previous one (same process, no gap) is
    /// merged into it, so unit-tick and jump-based runs produce the same trace.
    /// Empty intervals are ignored.
    pub fn push(&mut self, process_id: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            debug_assert!(start >= last.end, "slices must be appended in time order");
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice::new(process_id, start, end));
    }

    /// Time at which the last slice ends.
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time the CPU was executing some process.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Time within `[0, makespan)` the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// All slices of one process, in time order.
    pub fn slices_for(&self, process_id: &str) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Cumulative CPU time granted to one process.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.slices_for(process_id).iter().map(|s| s.duration()).sum()
    }

    /// First instant a process was dispatched.
    pub fn first_dispatch(&self, process_id: &str) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.start)
    }

    /// Executed time per process.
    pub fn executed_by_process(&self) -> HashMap<String, i64> {
        let mut executed: HashMap<String, i64> = HashMap::new();
        for s in &self.slices {
            *executed.entry(s.process_id.clone()).or_insert(0) += s.duration();
        }
        executed
    }

    /// Number of times the CPU switched from one process to a different one.
    ///
    /// Idle gaps do not count as a switch by themselves.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}
