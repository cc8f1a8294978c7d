//! Ready pool: admitted processes that still owe CPU time.

use std::collections::VecDeque;

use super::RuntimeProcess;
use crate::dispatching::RuleEngine;

/// Admitted, unfinished processes.
///
/// Supports both access patterns the policies need: FIFO
/// (`push_back` / `pop_front`, for FCFS and Round Robin) and rule-based
/// selection (`take_best`, for SJF, SRTF and Priority). Rule-based
/// selection is independent of queue order because the engine's
/// tie-breaker makes the comparison total.
#[derive(Debug, Clone, Default)]
pub struct ReadyPool {
    queue: VecDeque<RuntimeProcess>,
}

impl ReadyPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process at the back of the queue.
    pub fn push_back(&mut self, process: RuntimeProcess) {
        self.queue.push_back(process);
    }

    /// Appends several processes, preserving their order.
    pub fn extend(&mut self, processes: impl IntoIterator<Item = RuntimeProcess>) {
        self.queue.extend(processes);
    }

    /// Removes the head of the queue.
    pub fn pop_front(&mut self) -> Option<RuntimeProcess> {
        self.queue.pop_front()
    }

    /// Removes the process the engine ranks first.
    pub fn take_best(&mut self, engine: &RuleEngine) -> Option<RuntimeProcess> {
        let index = engine.select_best(&self.queue)?;
        self.queue.remove(index)
    }
}
