//! Arrival gate: releases processes as the clock reaches their arrival.

use std::collections::VecDeque;

use super::RuntimeProcess;
use crate::dispatching::RuleEngine;

/// Holds not-yet-arrived processes in first-come order.
///
/// Order is arrival time, stable on ties (input order).
#[derive(Debug, Clone, Default)]
pub struct ArrivalGate {
    pending: VecDeque<RuntimeProcess>,
}

impl ArrivalGate {
    /// Creates a gate over the given processes.
    pub fn new(processes: Vec<RuntimeProcess>) -> Self {
        let order = RuleEngine::first_come().sort_indices(&processes);
        let mut slots: Vec<Option<RuntimeProcess>> = processes.into_iter().map(Some).collect();
        let pending = order
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect();
        Self { pending }
    }

    /// Removes and returns every process with `arrival <= now`, in arrival order.
    pub fn admit(&mut self, now: i64) -> Vec<RuntimeProcess> {
        let ready = self
            .pending
            .iter()
            .take_while(|p| p.arrival() <= now)
            .count();
        self.pending.drain(..ready).collect()
    }

    /// Arrival time of the next pending process.
    pub fn next_arrival(&self) -> Option<i64> {
        self.pending.front().map(RuntimeProcess::arrival)
    }

}
