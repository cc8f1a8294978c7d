//! Rule engine for multi-key dispatching.
//!
//! Composes selection rules lexicographically and finishes with a
//! deterministic tie-breaker, so every comparison yields a total order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, SelectionRule};
use crate::simulation::RuntimeProcess;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Earlier position in the caller's input wins (stable order).
    #[default]
    InputOrder,
    /// Deterministic by process ID (lexicographic).
    ById,
}

/// A composable rule engine for ready-pool selection.
///
/// Rules are applied in sequence; a later rule is consulted only when all
/// earlier rules score two processes equally.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::MostUrgent)
///     .with_rule(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), RuleEngine::priority().rule_names());
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine (input order only).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// FCFS ordering: earliest arrival, then input order.
    pub fn first_come() -> Self {
        Self::new().with_rule(rules::EarliestArrival)
    }

    /// SJF selection: shortest burst, then earliest arrival, then input order.
    pub fn shortest_job() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::EarliestArrival)
    }

    /// SRTF selection: shortest remaining time, then earliest arrival, then input order.
    pub fn shortest_remaining() -> Self {
        Self::new()
            .with_rule(rules::ShortestRemaining)
            .with_rule(rules::EarliestArrival)
    }

    /// Priority selection: lowest priority value, then earliest arrival, then input order.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::MostUrgent)
            .with_rule(rules::EarliestArrival)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes; `Less` means `a` is dispatched first.
    pub fn compare(&self, a: &RuntimeProcess, b: &RuntimeProcess) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => a.input_index.cmp(&b.input_index),
            TieBreaker::ById => a.id().cmp(b.id()),
        }
    }

    /// Sorts processes by dispatch order.
    ///
    /// Returns indices into the given slice, best first.
    pub fn sort_indices(&self, processes: &[RuntimeProcess]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns the position of the process that should run next.
    pub fn select_best<'a, I>(&self, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a RuntimeProcess>,
    {
        candidates
            .into_iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| self.compare(a, b))
            .map(|(i, _)| i)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
