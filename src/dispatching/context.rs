//! Simulation context for selection rule evaluation.

use std::collections::HashMap;

use crate::models::time::Ticks;

/// Runtime simulation state visible to selection rules.
///
/// Borrows the remaining-work table of the running simulation so the
/// preemptive policies can re-rank every tick without copying.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// Current simulation clock (ticks).
    pub now: Ticks,
    /// Remaining burst per process id (ticks).
    pub remaining: &'a HashMap<String, Ticks>,
}

impl<'a> SelectionContext<'a> {
    /// Creates a context at the given time.
    pub fn new(now: Ticks, remaining: &'a HashMap<String, Ticks>) -> Self {
        Self { now, remaining }
    }

    /// Remaining work for a process, if tracked.
    pub fn remaining_ticks(&self, process_id: &str) -> Option<Ticks> {
        self.remaining.get(process_id).copied()
    }
}
