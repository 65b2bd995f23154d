//! Policy engine and metrics derivation.
//!
//! Simulates one CPU under a chosen policy and reports the exact
//! occupancy timeline together with per-process and aggregate metrics.
//!
//! # Algorithm
//!
//! Every policy shares one pipeline: select an eligible process, charge
//! context-switch overhead if the CPU changes hands, run it for a slice,
//! and jump over idle gaps to the next arrival. Policies differ only in
//! their selection rule and slice length.
//!
//! # Context Switches
//!
//! A switch is counted, and `context_switch_overhead` is added to the clock,
//! whenever a process other than the last one is dispatched. The overhead
//! appears as a gap in the timeline, not as a slice. An idle interval clears
//! the last-dispatched process, so resuming after idle is never charged.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod metrics;
mod policies;
mod policy;
mod simulator;
mod state;

pub use policy::Policy;
pub use simulator::{
    simulate, SimulationConfig, SimulationRequest, Simulator, DEFAULT_CONTEXT_SWITCH_OVERHEAD,
    DEFAULT_QUANTUM,
};
