//! Random workload generation.
//!
//! Produces process sets with Bernoulli arrivals: at every time unit a
//! process arrives with probability `arrival_probability`, and is either
//! short or long with probability `short_probability`. Identical seeds
//! give identical workloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;

/// Parameters of a generated workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of time units during which processes may arrive.
    pub ticks: i64,
    /// Probability that a process arrives at a given tick.
    pub arrival_probability: f64,
    /// Probability that an arriving process is short.
    pub short_probability: f64,
    /// Burst of a short process.
    pub short_burst: i64,
    /// Burst of a long process.
    pub long_burst: i64,
    /// Priorities are drawn uniformly from `0..priority_levels`.
    pub priority_levels: i32,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            ticks: 100,
            arrival_probability: 0.3,
            short_probability: 0.3,
            short_burst: 2,
            long_burst: 6,
            priority_levels: 4,
            seed: 0,
        }
    }
}

impl WorkloadConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival window length.
    pub fn with_ticks(mut self, ticks: i64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p;
        self
    }

    /// Sets the short/long mix and the two burst sizes.
    pub fn with_bursts(mut self, short_probability: f64, short_burst: i64, long_burst: i64) -> Self {
        self.short_probability = short_probability;
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self
    }

    /// Sets the number of priority levels (at least 1).
    pub fn with_priority_levels(mut self, levels: i32) -> Self {
        self.priority_levels = levels;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set, in arrival order, with IDs `P0`, `P1`, ...
    ///
    /// Every process carries a priority, so the set is valid for every policy
    /// as long as both burst sizes are positive.
    pub fn generate(&self) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let levels = self.priority_levels.max(1);
        let mut processes = Vec::new();

        for t in 0..self.ticks {
            if rng.random::<f64>() < self.arrival_probability {
                let burst = if rng.random::<f64>() < self.short_probability {
                    self.short_burst
                } else {
                    self.long_burst
                };
                let priority = rng.random_range(0..levels);

                processes.push(
                    ProcessSpec::new(format!("P{}", processes.len()), t, burst)
                        .with_priority(priority),
                );
            }
        }

        processes
    }
}
