//! Built-in selection rules.
//!
//! | Rule | Score | Policies |
//! |------|-------|----------|
//! | `ArrivalOrder` | arrival time | FCFS, tie-breaker for all |
//! | `ShortestBurst` | total burst | SJF |
//! | `ShortestRemaining` | remaining burst | SRTF |
//! | `PriorityValue` | priority value | PRIORITY, PRIORITY_PREEMPTIVE |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::Process;

/// First Come First Served.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext<'_>) -> RuleScore {
        process.arrival_ticks()
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total burst. Minimizes mean
/// waiting time among non-preemptive orderings.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext<'_>) -> RuleScore {
        process.burst_ticks()
    }
}

/// Shortest Remaining Time First.
///
/// Uses `context.remaining`; falls back to the full burst for processes
/// not yet tracked.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process, context: &SelectionContext<'_>) -> RuleScore {
        context
            .remaining_ticks(&process.id)
            .unwrap_or_else(|| process.burst_ticks())
    }
}

/// Priority value.
///
/// Prioritizes processes with smaller `priority` values.
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl SelectionRule for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext<'_>) -> RuleScore {
        process.priority as RuleScore
    }
}
