//! Runtime process state.

use crate::models::ProcessSpec;

/// Working copy of a process during one simulation run.
///
/// Owns a clone of the caller's spec plus the mutable remaining burst.
/// Only the `TimeStepper` decrements `remaining`; the process is retired
/// the moment it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProcess {
    /// Immutable input.
    pub spec: ProcessSpec,
    /// Position in the caller's input (final, stable tie-breaker).
    pub input_index: usize,
    /// CPU time still owed.
    pub remaining: i64,
    /// First instant the process held the CPU.
    pub first_dispatch: Option<i64>,
}

impl RuntimeProcess {
    /// Creates the runtime state for the process at `input_index`.
    pub fn new(spec: ProcessSpec, input_index: usize) -> Self {
        let remaining = spec.burst;
        Self {
            spec,
            input_index,
            remaining,
            first_dispatch: None,
        }
    }

    /// Builds runtime state for a whole input list, preserving input order.
    pub fn from_specs(specs: &[ProcessSpec]) -> Vec<Self> {
        specs
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, spec)| Self::new(spec, i))
            .collect()
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    /// Arrival time.
    #[inline]
    pub fn arrival(&self) -> i64 {
        self.spec.arrival
    }

    /// Whether all work has been executed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_specs_keeps_input_order() {
        let specs = vec![ProcessSpec::new("B", 4, 2), ProcessSpec::new("A", 0, 3)];
        let procs = RuntimeProcess::from_specs(&specs);

        assert_eq!(procs[0].id(), "B");
        assert_eq!(procs[0].input_index, 0);
        assert_eq!(procs[1].id(), "A");
        assert_eq!(procs[1].input_index, 1);
        assert_eq!(procs[1].remaining, 3);
        assert!(procs[1].first_dispatch.is_none());
    }

    #[test]
    fn test_progress_accessors() {
        let mut p = RuntimeProcess::new(ProcessSpec::new("P1", 0, 5), 0);
        assert!(!p.is_finished());
        p.remaining = 0;
        assert!(p.is_finished());
    }
}
