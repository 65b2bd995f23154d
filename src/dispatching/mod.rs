//! Selection rules and rule engine for CPU dispatch.
//!
//! Every policy except Round Robin picks the next process by scoring the
//! eligible set with a primary rule (arrival, burst, remaining time or
//! priority value) and breaking ties by earlier arrival.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{RuleEngine, SelectionContext};
//! use u_cpu_schedule::dispatching::rules;
//! use u_cpu_schedule::models::Process;
//! use std::collections::HashMap;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::ArrivalOrder);
//!
//! let processes = vec![Process::new("P1", 0.0, 4.0), Process::new("P2", 0.0, 2.0)];
//! let remaining = HashMap::new();
//! let context = SelectionContext::new(0, &remaining);
//! assert_eq!(engine.select_best(&processes, 0..2, &context), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SelectionContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first. Scores are integral (ticks or priority
/// values) so ties are exact.
pub type RuleScore = i64;

/// A rule that ranks eligible processes.
///
/// # Score Convention
/// **Lower score = dispatched first.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Scores a process given the current simulation context.
    fn evaluate(&self, process: &Process, context: &SelectionContext<'_>) -> RuleScore;
}
