//! Rule-driven non-preemptive dispatching (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by now.
//! 2. Pick the ready process the rule engine ranks first.
//! 3. Run it to completion; later arrivals cannot interrupt it.
//! 4. If nothing is ready, jump the clock to the next arrival.
//!
//! # Complexity
//! O(k) per dispatch for the selection, k = ready-pool size.

use crate::dispatching::RuleEngine;
use crate::simulation::SimulationState;

pub(crate) fn run(state: &mut SimulationState, engine: &RuleEngine) {
    loop {
        state.admit_arrivals();
        match state.pool.take_best(engine) {
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

#[cfg(test)]
mod tests {
    use crate::models::ProcessSpec;
    use crate::scheduler::{priority, sjf};
    use crate::SchedulingError;

    #[test]
    fn test_sjf_reference_scenario() {
        let processes = vec![
            ProcessSpec::new("1", 0, 6),
            ProcessSpec::new("2", 2, 2),
            ProcessSpec::new("3", 5, 8),
            ProcessSpec::new("4", 1, 3),
        ];
        let outcome = sjf(&processes).unwrap();

        // Only P1 is ready at t=0; afterwards shortest burst first
        assert_eq!(outcome.record("1").unwrap().completion, 6);
        assert_eq!(outcome.record("2").unwrap().start, Some(6));
        assert_eq!(outcome.record("2").unwrap().completion, 8);
        assert_eq!(outcome.record("4").unwrap().completion, 11);
        assert_eq!(outcome.record("3").unwrap().completion, 19);
    }

    #[test]
    fn test_sjf_no_preemption() {
        let processes = vec![ProcessSpec::new("long", 0, 10), ProcessSpec::new("short", 1, 1)];
        let outcome = sjf(&processes).unwrap();

        assert_eq!(outcome.record("long").unwrap().completion, 10);
        assert_eq!(outcome.record("short").unwrap().start, Some(10));
    }

    #[test]
    fn test_sjf_tie_breaks_by_arrival_then_input() {
        let processes = vec![
            ProcessSpec::new("blocker", 0, 5),
            ProcessSpec::new("B", 2, 2),
            ProcessSpec::new("A", 1, 2),
            ProcessSpec::new("C", 2, 2),
        ];
        let outcome = sjf(&processes).unwrap();

        assert_eq!(outcome.record("A").unwrap().start, Some(5));
        assert_eq!(outcome.record("B").unwrap().start, Some(7));
        assert_eq!(outcome.record("C").unwrap().start, Some(9));
    }

    #[test]
    fn test_priority_reference_scenario() {
        let processes = vec![
            ProcessSpec::new("1", 0, 4).with_priority(2),
            ProcessSpec::new("2", 1, 3).with_priority(1),
            ProcessSpec::new("3", 2, 1).with_priority(3),
            ProcessSpec::new("4", 3, 5).with_priority(2),
        ];
        let outcome = priority(&processes).unwrap();

        let completions: Vec<i64> = outcome.records.iter().map(|r| r.completion).collect();
        assert_eq!(completions, vec![4, 7, 13, 12]);
        assert_eq!(outcome.record("4").unwrap().waiting, 4);
    }

    #[test]
    fn test_priority_not_preempted_by_urgent_arrival() {
        let processes = vec![
            ProcessSpec::new("low", 0, 6).with_priority(9),
            ProcessSpec::new("urgent", 1, 1).with_priority(0),
        ];
        let outcome = priority(&processes).unwrap();
        assert_eq!(outcome.record("low").unwrap().completion, 6);
        assert_eq!(outcome.record("urgent").unwrap().completion, 7);
    }

    #[test]
    fn test_priority_requires_priorities() {
        let processes = vec![ProcessSpec::new("1", 0, 4)];
        let err = priority(&processes).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, SchedulingError::InvalidProcesses(_)));
    }
}
