//! CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Computes, for a set of processes described by arrival time and CPU
//! demand, the execution timeline under five classic disciplines:
//! FCFS, non-preemptive SJF, preemptive SRTF, non-preemptive Priority,
//! and Round Robin with a fixed quantum.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ExecutionRecord`, `Timeline`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative arrivals, empty bursts)
//! - **`dispatching`**: Selection rules and the rule engine behind every ready-pool choice
//! - **`simulation`**: Arrival gate, ready pool, time stepper, per-run state
//! - **`scheduler`**: Policies, `SchedulerEngine`, outcomes and KPIs
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessSpec;
//! use u_cpusched::scheduler;
//!
//! let processes = vec![
//!     ProcessSpec::new("1", 0, 8),
//!     ProcessSpec::new("2", 1, 4),
//!     ProcessSpec::new("3", 2, 2),
//!     ProcessSpec::new("4", 3, 1),
//! ];
//! let outcome = scheduler::srtf(&processes).unwrap();
//! assert_eq!(outcome.record("1").unwrap().completion, 15);
//! ```
//!
//! # Determinism
//!
//! Runs are pure and single-threaded. The same input always yields the
//! same records; no state is shared between runs.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SchedulingError;
