//! Per-run simulation state.

use tracing::debug;

use super::{ArrivalGate, ReadyPool, RuntimeProcess, TimeStepper};
use crate::error::SchedulingError;
use crate::models::{ExecutionRecord, ProcessSpec, Timeline};
use crate::validation::makespan_bound;

/// Which dispatch time, if any, goes into `ExecutionRecord::start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStart {
    /// The process's (single) dispatch time.
    Dispatch,
    /// Not recorded; only completion is tracked.
    Omitted,
}

/// Everything one scheduling run owns: arrival gate, ready pool, clock,
/// and the records of retired processes.
///
/// Created per run and never shared, so independent runs may execute
/// concurrently.
#[derive(Debug)]
pub struct SimulationState {
    pub(crate) gate: ArrivalGate,
    pub(crate) pool: ReadyPool,
    pub(crate) clock: TimeStepper,
    records: Vec<Option<ExecutionRecord>>,
    retired: usize,
    record_start: RecordStart,
    horizon: i64,
}

impl SimulationState {
    /// Creates the state for a run over `specs`.
    pub fn new(specs: &[ProcessSpec], record_start: RecordStart) -> Self {
        let horizon = makespan_bound(specs).unwrap_or(i64::MAX);

        Self {
            gate: ArrivalGate::new(RuntimeProcess::from_specs(specs)),
            pool: ReadyPool::new(),
            clock: TimeStepper::new(),
            records: vec![None; specs.len()],
            retired: 0,
            record_start,
            horizon,
        }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Upper bound on the makespan: `max(arrival) + sum(burst)`.
    #[inline]
    pub fn horizon(&self) -> i64 {
        self.horizon
    }

    /// Moves every process that has arrived by now to the back of the
    /// ready pool, in arrival order. Returns how many were admitted.
    pub fn admit_arrivals(&mut self) -> usize {
        let arrived = self.gate.admit(self.clock.now());
        let count = arrived.len();
        self.pool.extend(arrived);
        count
    }

    /// Jumps the clock to the next arrival.
    ///
    /// Returns `false` when no process is left to arrive.
    pub fn idle_to_next_arrival(&mut self) -> bool {
        match self.gate.next_arrival() {
            Some(t) => {
                self.clock.idle_until(t);
                true
            }
            None => false,
        }
    }

    /// Records completion of a finished process at the current time.
    pub fn retire(&mut self, process: RuntimeProcess) {
        debug_assert!(process.is_finished(), "only finished processes retire");

        let completion = self.clock.now();
        let start = match self.record_start {
            RecordStart::Dispatch => process.first_dispatch,
            RecordStart::Omitted => None,
        };
        debug!(process = process.id(), completion, "Process retired");

        let index = process.input_index;
        self.records[index] = Some(ExecutionRecord::new(&process.spec, start, completion));
        self.retired += 1;
    }

    /// Whether every process has retired.
    pub fn is_done(&self) -> bool {
        self.retired == self.records.len()
    }

    /// Returns records in input order plus the executed timeline.
    ///
    /// # Errors
    /// `HorizonExceeded` if some process never retired.
    pub fn finish(self) -> Result<(Vec<ExecutionRecord>, Timeline), SchedulingError> {
        let horizon = self.horizon;
        let records = self
            .records
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(SchedulingError::HorizonExceeded { horizon })?;
        Ok((records, self.clock.into_timeline()))
    }
}
