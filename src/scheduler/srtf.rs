//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Strategies
//!
//! - **Unit tick**: every time unit, admit arrivals, pick the ready process
//!   with the least remaining work (then earliest arrival, then input
//!   order) and run it for one unit. O(makespan * n).
//! - **Event driven**: the choice can only change when a process arrives
//!   or the running one finishes, so run the selected process straight to
//!   the sooner of those two events. O(n^2) worst case, independent of
//!   burst sizes.
//!
//! Between arrivals the selected process only gets shorter while the
//! others stay put, so it keeps winning; both strategies therefore produce
//! identical records and timelines.
//!
//! # Reference
//! Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//! Processing Time Discipline"

use crate::dispatching::RuleEngine;
use crate::simulation::SimulationState;

/// Unit-tick loop, bounded by `max(arrival) + sum(burst)`.
pub(crate) fn run_unit_tick(state: &mut SimulationState) {
    let engine = RuleEngine::shortest_remaining();
    let horizon = state.horizon();

    while !state.is_done() && state.now() < horizon {
        state.admit_arrivals();
        match state.pool.take_best(&engine) {
            Some(mut process) => {
                state.clock.execute(&mut process, 1);
                if process.is_finished() {
                    state.retire(process);
                } else {
                    state.pool.push_back(process);
                }
            }
            None => state.clock.idle_tick(),
        }
    }
}

/// Jumps directly between preemption points.
pub(crate) fn run_event_driven(state: &mut SimulationState) {
    let engine = RuleEngine::shortest_remaining();

    loop {
        state.admit_arrivals();
        match state.pool.take_best(&engine) {
            Some(mut process) => {
                let slice = match state.gate.next_arrival() {
                    Some(arrival) => (arrival - state.now()).min(process.remaining),
                    None => process.remaining,
                };
                state.clock.execute(&mut process, slice);
                if process.is_finished() {
                    state.retire(process);
                } else {
                    state.pool.push_back(process);
                }
            }
            None => {
                if !state.idle_to_next_arrival() {
                    break;
                }
            }
        }
    }
}
