//! Time stepper: the simulation clock and the only mutator of remaining work.

use tracing::{debug, trace};

use super::RuntimeProcess;
use crate::models::Timeline;

/// Advances simulated time and records executed slices.
///
/// Time never decreases. Execution either jumps by a whole slice
/// (`execute`) or by a single unit (`execute` with `1`); idle periods
/// either jump to an event (`idle_until`) or tick (`idle_tick`).
#[derive(Debug, Clone, Default)]
pub struct TimeStepper {
    now: i64,
    timeline: Timeline,
}

impl TimeStepper {
    /// Creates a clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Runs `process` for up to `amount` units starting now.
    ///
    /// Execution is capped at the process's remaining work. Returns the
    /// time actually executed.
    pub fn execute(&mut self, process: &mut RuntimeProcess, amount: i64) -> i64 {
        let run = amount.min(process.remaining).max(0);
        if run == 0 {
            return 0;
        }

        let start = self.now;
        let end = start + run;
        process.first_dispatch.get_or_insert(start);
        process.remaining -= run;
        self.timeline.push(process.id(), start, end);
        self.now = end;

        debug!(
            process = process.id(),
            start,
            end,
            remaining = process.remaining,
            "Executed slice"
        );
        run
    }

    /// Jumps the clock forward to `time` without executing anything.
    ///
    /// Times in the past are ignored.
    pub fn idle_until(&mut self, time: i64) {
        if time > self.now {
            trace!(from = self.now, to = time, "CPU idle");
            self.now = time;
        }
    }

    /// Advances the clock by one unit without executing anything.
    pub fn idle_tick(&mut self) {
        trace!(at = self.now, "CPU idle tick");
        self.now += 1;
    }

    /// Consumes the stepper, returning the recorded timeline.
    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }
}
