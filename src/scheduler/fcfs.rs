//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Admit arrivals into a FIFO queue (arrival order, stable on ties).
//! 2. Run the head of the queue to completion.
//! 3. If the queue is empty, jump the clock to the next arrival.
//!
//! # Complexity
//! O(n log n) for the arrival sort, O(n) for the walk.

use crate::simulation::SimulationState;

pub(crate) fn run(state: &mut SimulationState) {
    loop {
        state.admit_arrivals();
        match state.pool.pop_front() {
            Some(mut process) => {
                let burst = process.remaining;
                state.clock.execute(&mut process, burst);
                state.retire(process);
            }
            None => {
                if !state.idle_to_next_arrival() {
                    break;
                }
            }
        }
    }
}
