//! CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Given a set of processes (arrival, burst, priority) and a policy,
//! produces the exact single-CPU execution timeline, including idle gaps
//! and context-switch overhead, and derives waiting, turnaround and
//! response times plus CPU utilization and throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `TimelineSlice`, `ProcessMetrics`,
//!   `AlgorithmResult`
//! - **`dispatching`**: Selection rules (arrival, burst, remaining, priority)
//!   and the tie-breaking rule engine
//! - **`scheduler`**: `Policy`, `Simulator` and the policy loops
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, quantum)
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::scheduler::{simulate, Policy};
//!
//! let processes = vec![Process::new("P1", 0.0, 4.0), Process::new("P2", 1.0, 2.0)];
//! let result = simulate(Policy::Fcfs, &processes, 2.0).unwrap();
//!
//! assert_eq!(result.timeline.len(), 2);
//! assert_eq!(result.context_switches, 1);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
