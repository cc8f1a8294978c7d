//! Cross-policy properties checked on generated workloads.

use proptest::prelude::*;

use super::{Policy, ScheduleOutcome, SchedulerEngine, SrtfStrategy};
use crate::models::ProcessSpec;
use crate::workload::WorkloadConfig;

const POLICIES: [Policy; 5] = [
    Policy::Fcfs,
    Policy::Sjf,
    Policy::Srtf,
    Policy::Priority,
    Policy::RoundRobin { quantum: 3 },
];

fn processes() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..20, 1i64..10, 0i32..5), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn run(policy: Policy, processes: &[ProcessSpec]) -> ScheduleOutcome {
    SchedulerEngine::new(policy).run(processes).unwrap()
}

proptest! {
    #[test]
    fn prop_every_process_recorded_once(ps in processes()) {
        for policy in POLICIES {
            let outcome = run(policy, &ps);
            prop_assert_eq!(outcome.records.len(), ps.len());
            for (spec, record) in ps.iter().zip(&outcome.records) {
                prop_assert_eq!(&spec.id, &record.id);
            }
        }
    }

    #[test]
    fn prop_work_is_conserved(ps in processes()) {
        let total: i64 = ps.iter().map(|p| p.burst).sum();
        for policy in POLICIES {
            let outcome = run(policy, &ps);
            prop_assert_eq!(outcome.timeline.busy_time(), total);
            let executed = outcome.timeline.executed_by_process();
            prop_assert_eq!(executed.len(), ps.len());
            for p in &ps {
                prop_assert_eq!(executed[&p.id], p.burst);
            }
        }
    }

    #[test]
    fn prop_metrics_are_consistent(ps in processes()) {
        for policy in POLICIES {
            let outcome = run(policy, &ps);
            for r in &outcome.records {
                prop_assert!(r.waiting >= 0);
                prop_assert!(r.turnaround >= r.burst);
                prop_assert!(r.completion >= r.arrival + r.burst);
                prop_assert_eq!(r.turnaround, r.completion - r.arrival);
                prop_assert_eq!(r.waiting, r.turnaround - r.burst);
                if let Some(start) = r.start {
                    prop_assert!(start >= r.arrival);
                    prop_assert_eq!(r.completion, start + r.burst);
                }
            }
        }
    }

    #[test]
    fn prop_timeline_is_monotonic(ps in processes()) {
        for policy in POLICIES {
            let outcome = run(policy, &ps);
            let slices = &outcome.timeline.slices;
            prop_assert!(slices.iter().all(|s| s.end > s.start));
            prop_assert!(slices.windows(2).all(|w| w[0].end <= w[1].start));
            prop_assert_eq!(outcome.timeline.makespan(), outcome.makespan());
        }
    }

    #[test]
    fn prop_runs_are_idempotent(ps in processes()) {
        for policy in POLICIES {
            prop_assert_eq!(run(policy, &ps), run(policy, &ps));
        }
    }

    #[test]
    fn prop_work_conserving_policies_share_makespan(ps in processes()) {
        let makespan = run(Policy::Fcfs, &ps).makespan();
        for policy in POLICIES {
            prop_assert_eq!(run(policy, &ps).makespan(), makespan);
        }
    }

    #[test]
    fn prop_fcfs_dispatches_in_arrival_order(ps in processes()) {
        let outcome = run(Policy::Fcfs, &ps);
        let mut order: Vec<usize> = (0..ps.len()).collect();
        order.sort_by_key(|&i| ps[i].arrival);
        for w in order.windows(2) {
            let a = &outcome.records[w[0]];
            let b = &outcome.records[w[1]];
            prop_assert!(a.completion <= b.start.unwrap_or(i64::MAX));
        }
    }

    #[test]
    fn prop_srtf_strategies_agree(ps in processes()) {
        let tick = run(Policy::Srtf, &ps);
        let event = SchedulerEngine::new(Policy::Srtf)
            .with_srtf_strategy(SrtfStrategy::EventDriven)
            .run(&ps)
            .unwrap();
        prop_assert_eq!(tick, event);
    }

    #[test]
    fn prop_srtf_total_completion_not_worse_than_sjf(ps in processes()) {
        let srtf = run(Policy::Srtf, &ps);
        let sjf = run(Policy::Sjf, &ps);
        prop_assert!(srtf.total_completion() <= sjf.total_completion());
        prop_assert!(srtf.average_waiting <= sjf.average_waiting + 1e-9);
    }

    #[test]
    fn prop_round_robin_gap_bounded_for_simultaneous_arrivals(
        bursts in prop::collection::vec(1i64..12, 1..8),
        quantum in 1i64..5,
    ) {
        let ps: Vec<ProcessSpec> = bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| ProcessSpec::new(format!("P{i}"), 0, b))
            .collect();
        let outcome = run(Policy::RoundRobin { quantum }, &ps);
        let bound = (ps.len() as i64 - 1) * quantum;

        for p in &ps {
            let slices = outcome.timeline.slices_for(&p.id);
            for w in slices.windows(2) {
                prop_assert!(w[1].start - w[0].end <= bound);
            }
        }
    }
}

#[test]
fn test_generated_workload_runs_under_every_policy() {
    let ps = WorkloadConfig::new().with_ticks(300).with_seed(3).generate();
    let total: i64 = ps.iter().map(|p| p.burst).sum();

    for policy in POLICIES {
        let outcome = run(policy, &ps);
        assert_eq!(outcome.records.len(), ps.len());
        assert_eq!(outcome.kpi().total_burst, total);
    }
}
