//! Selection rules and rule engine for ready-pool dispatching.
//!
//! Every policy that chooses among several ready processes (SJF, SRTF,
//! Priority) does so through a [`RuleEngine`]: a chain of comparators
//! applied in order, each consulted only when the previous ones tie,
//! followed by a final deterministic tie-breaker.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, rules};
//!
//! // SJF: shortest burst, then earliest arrival, then input order.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_rule(rules::EarliestArrival);
//! assert_eq!(engine.rule_names(), vec!["SB", "ARRIVAL"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::simulation::RuntimeProcess;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first. Integer so that ties are exact.
pub type RuleScore = i64;

/// A comparator key over ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SB", "SRT").
    fn name(&self) -> &'static str;

    /// Evaluates the dispatch key of a process.
    fn evaluate(&self, process: &RuntimeProcess) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
