//! Per-run simulation state.
//!
//! Built fresh for every run and owned exclusively by it, so runs of
//! different policies share nothing and may execute in parallel.

use std::collections::HashMap;

use tracing::debug;

use crate::models::time::Ticks;
use crate::models::{Process, Timeline};

/// Charges overhead whenever the CPU changes hands between processes.
///
/// The first dispatch and the first dispatch after an idle gap are free:
/// inserting an idle interval clears the baseline.
#[derive(Debug, Clone)]
pub(crate) struct SwitchAccountant {
    last: Option<String>,
    count: usize,
    overhead: Ticks,
}

impl SwitchAccountant {
    pub(crate) fn new(overhead: Ticks) -> Self {
        Self {
            last: None,
            count: 0,
            overhead,
        }
    }

    /// Registers a dispatch of `process_id`; returns the overhead to charge.
    pub(crate) fn dispatch(&mut self, process_id: &str) -> Ticks {
        let charge = match self.last.as_deref() {
            Some(prev) if prev != process_id => {
                self.count += 1;
                debug!(from = prev, to = process_id, "context switch");
                self.overhead
            }
            _ => 0,
        };
        if self.last.as_deref() != Some(process_id) {
            self.last = Some(process_id.to_string());
        }
        charge
    }

    /// Forgets the last dispatched process.
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

/// Mutable bookkeeping for one policy run.
///
/// `processes` is an arrival-sorted snapshot of the caller's records; all
/// index arguments refer to it.
#[derive(Debug)]
pub(crate) struct SimulationState {
    pub(crate) processes: Vec<Process>,
    pub(crate) now: Ticks,
    pub(crate) remaining: HashMap<String, Ticks>,
    pub(crate) first_start: HashMap<String, Ticks>,
    pub(crate) completion: HashMap<String, Ticks>,
    pub(crate) timeline: Timeline,
    pub(crate) switches: SwitchAccountant,
}

impl SimulationState {
    /// Snapshots `processes` in stable arrival order.
    pub(crate) fn new(processes: &[Process], overhead: Ticks) -> Self {
        let mut sorted = processes.to_vec();
        sorted.sort_by_key(Process::arrival_ticks);

        let remaining = sorted
            .iter()
            .map(|p| (p.id.clone(), p.burst_ticks()))
            .collect();

        Self {
            processes: sorted,
            now: 0,
            remaining,
            first_start: HashMap::new(),
            completion: HashMap::new(),
            timeline: Timeline::new(),
            switches: SwitchAccountant::new(overhead),
        }
    }

    /// Remaining work of the process at `idx`.
    pub(crate) fn remaining_of(&self, idx: usize) -> Ticks {
        self.remaining
            .get(&self.processes[idx].id)
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn has_arrived(&self, idx: usize) -> bool {
        self.processes[idx].arrival_ticks() <= self.now
    }

    /// Indices of arrived processes with work left, in arrival order.
    pub(crate) fn eligible(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.processes.len())
            .filter(move |&i| self.has_arrived(i) && self.remaining_of(i) > 0)
    }

    /// Earliest future arrival among processes with work left.
    pub(crate) fn next_arrival(&self) -> Option<Ticks> {
        (0..self.processes.len())
            .filter(|&i| !self.has_arrived(i) && self.remaining_of(i) > 0)
            .map(|i| self.processes[i].arrival_ticks())
            .min()
    }

    pub(crate) fn all_complete(&self) -> bool {
        self.completion.len() >= self.processes.len()
    }

    /// Hands the CPU to the process at `idx`.
    ///
    /// Charges switch overhead before the burst begins and stamps the
    /// first-dispatch time once.
    pub(crate) fn dispatch(&mut self, idx: usize) {
        let id = &self.processes[idx].id;
        self.now += self.switches.dispatch(id);
        if !self.first_start.contains_key(id) {
            self.first_start.insert(id.clone(), self.now);
        }
    }

    /// Runs the process at `idx` for `ticks`; returns its remaining work.
    pub(crate) fn run(&mut self, idx: usize, ticks: Ticks) -> Ticks {
        let id = &self.processes[idx].id;
        let end = self.now + ticks;
        self.timeline.record(id, self.now, end);
        self.now = end;

        let left = match self.remaining.get_mut(id) {
            Some(rem) => {
                *rem = (*rem - ticks).max(0);
                *rem
            }
            None => 0,
        };
        if left == 0 {
            self.completion.insert(id.clone(), end);
        }
        left
    }

    /// Leaves the CPU idle until `until`.
    pub(crate) fn idle_until(&mut self, until: Ticks) {
        debug!(from = self.now, until, "cpu idle");
        self.timeline.record_idle(self.now, until);
        self.now = self.now.max(until);
        self.switches.reset();
    }
}
