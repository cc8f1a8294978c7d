//! Simulation building blocks shared by every policy.
//!
//! - **`ArrivalGate`**: releases processes into the ready pool as the clock
//!   reaches their arrival time.
//! - **`ReadyPool`**: admitted, unfinished processes; FIFO or rule-based access.
//! - **`TimeStepper`**: the clock; executes slices, idles, records the timeline.
//! - **`SimulationState`**: owns all three for exactly one run.

mod arrivals;
mod clock;
mod pool;
mod process;
mod state;

pub use arrivals::ArrivalGate;
pub use clock::TimeStepper;
pub use pool::ReadyPool;
pub use process::RuntimeProcess;
pub use state::{RecordStart, SimulationState};
