//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Pop the head of the FIFO ready queue.
//! 2. Run it for `min(quantum, remaining)` in one jump.
//! 3. Queue every process that arrived during (or at the end of) that
//!    slice, in arrival order.
//! 4. Only then re-queue the preempted process if it still has work, so
//!    new arrivals run ahead of it.
//! 5. If the queue is empty, jump the clock to the next arrival.
//!
//! Only completion is tracked per process; records carry no start time.

use crate::simulation::SimulationState;

pub(crate) fn run(state: &mut SimulationState, quantum: i64) {
    debug_assert!(quantum > 0, "quantum is validated before the run");

    loop {
        state.admit_arrivals();
        match state.pool.pop_front() {
            Some(mut process) => {
                state.clock.execute(&mut process, quantum);
                state.admit_arrivals();
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

#[cfg(test)]
mod tests {
    use crate::models::{ProcessSpec, Slice};
    use crate::scheduler::round_robin;
    use crate::SchedulingError;

    fn sample() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("1", 0, 5),
            ProcessSpec::new("2", 1, 3),
            ProcessSpec::new("3", 2, 1),
            ProcessSpec::new("4", 3, 2),
        ]
    }

    #[test]
    fn test_round_robin_reference_scenario() {
        let outcome = round_robin(&sample(), 2).unwrap();

        let completions: Vec<i64> = outcome.records.iter().map(|r| r.completion).collect();
        assert_eq!(completions, vec![11, 10, 5, 9]);

        let waitings: Vec<i64> = outcome.records.iter().map(|r| r.waiting).collect();
        assert_eq!(waitings, vec![6, 6, 2, 4]);
        assert!(outcome.records.iter().all(|r| r.start.is_none()));
    }

    #[test]
    fn test_arrivals_queue_ahead_of_preempted_process() {
        let outcome = round_robin(&sample(), 2).unwrap();
        assert_eq!(
            outcome.timeline.slices,
            vec![
                Slice::new("1", 0, 2),
                Slice::new("2", 2, 4),
                Slice::new("3", 4, 5),
                Slice::new("1", 5, 7),
                Slice::new("4", 7, 9),
                Slice::new("2", 9, 10),
                Slice::new("1", 10, 11),
            ]
        );
    }

    #[test]
    fn test_arrival_at_slice_end_runs_first() {
        // B arrives exactly when A's quantum expires
        let processes = vec![ProcessSpec::new("A", 0, 4), ProcessSpec::new("B", 2, 1)];
        let outcome = round_robin(&processes, 2).unwrap();

        assert_eq!(outcome.record("B").unwrap().completion, 3);
        assert_eq!(outcome.record("A").unwrap().completion, 5);
    }

    #[test]
    fn test_large_quantum_behaves_like_fcfs() {
        let fcfs = crate::scheduler::fcfs(&sample()).unwrap();
        let rr = round_robin(&sample(), 100).unwrap();

        let a: Vec<i64> = fcfs.records.iter().map(|r| r.completion).collect();
        let b: Vec<i64> = rr.records.iter().map(|r| r.completion).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_idle_until_next_arrival() {
        let processes = vec![ProcessSpec::new("A", 0, 1), ProcessSpec::new("B", 5, 3)];
        let outcome = round_robin(&processes, 2).unwrap();

        assert_eq!(outcome.record("B").unwrap().completion, 8);
        assert_eq!(outcome.timeline.idle_time(), 4);
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let err = round_robin(&sample(), 0).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidQuantum(0));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_negative_quantum_rejected() {
        let err = round_robin(&sample(), -3).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidQuantum(-3));
    }
}
