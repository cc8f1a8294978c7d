//! CPU scheduling domain models.
//!
//! Provides the input and output types shared by every policy.
//!
//! # Model Mappings
//!
//! | u-cpusched | OS textbook | Role |
//! |------------|-------------|------|
//! | ProcessSpec | Process / job | Input: arrival, burst, priority |
//! | ExecutionRecord | Process table row | Output: completion, turnaround, waiting |
//! | Timeline | Gantt chart | Output: executed intervals |

mod process;
mod record;
mod timeline;

pub use process::ProcessSpec;
pub use record::ExecutionRecord;
pub use timeline::{Slice, Timeline};
