//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: arrival, burst, priority |
//! | `Timeline` | Slice accumulator used while simulating |
//! | `TimelineSlice` | Output: one CPU occupancy interval |
//! | `ProcessMetrics` | Output: per-process waiting/turnaround/response |
//! | `AlgorithmResult` | Output: everything produced by one policy run |

mod process;
mod result;
pub mod time;
mod timeline;

pub use process::Process;
pub use result::{AlgorithmResult, ProcessMetrics};
pub use timeline::{Timeline, TimelineSlice, IDLE};
