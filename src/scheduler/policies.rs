//! Policy simulation loops.
//!
//! Three loop shapes cover the six policies:
//!
//! - **Run to completion** (FCFS, SJF, PRIORITY): pick the best eligible
//!   process and run its whole burst in one slice.
//! - **Micro-tick** (SRTF, PRIORITY_PREEMPTIVE): re-pick every tick, so
//!   preemption falls out of reselection rather than an explicit event.
//! - **Round Robin**: FIFO ready queue, slices bounded by the quantum.
//!
//! When nothing is eligible the clock jumps to the next arrival and the
//! gap is recorded as idle.

use std::collections::{HashSet, VecDeque};

use super::state::SimulationState;
use crate::dispatching::{RuleEngine, SelectionContext};
use crate::models::time::Ticks;

/// Preemption granularity of the micro-tick policies (0.1 time units).
pub(crate) const MICRO_TICK: Ticks = 1;

/// Runs each selected process for `slice(remaining)` ticks until all
/// processes complete.
fn run_selected(
    state: &mut SimulationState,
    engine: &RuleEngine,
    slice: impl Fn(Ticks) -> Ticks,
) {
    while !state.all_complete() {
        let pick = {
            let ctx = SelectionContext::new(state.now, &state.remaining);
            engine.select_best(&state.processes, state.eligible(), &ctx)
        };

        match pick {
            Some(idx) => {
                state.dispatch(idx);
                let ticks = slice(state.remaining_of(idx));
                state.run(idx, ticks);
            }
            None => match state.next_arrival() {
                Some(arrival) => state.idle_until(arrival),
                None => break,
            },
        }
    }
}

/// FCFS, SJF and non-preemptive priority.
pub(crate) fn run_to_completion(state: &mut SimulationState, engine: &RuleEngine) {
    run_selected(state, engine, |remaining| remaining);
}

/// SRTF and preemptive priority.
pub(crate) fn micro_tick(state: &mut SimulationState, engine: &RuleEngine) {
    run_selected(state, engine, |remaining| remaining.min(MICRO_TICK));
}

/// FIFO ready queue plus an arrival cursor over the sorted snapshot.
struct ReadyQueue {
    queue: VecDeque<usize>,
    queued: HashSet<usize>,
    cursor: usize,
}

impl ReadyQueue {
    fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            cursor: 0,
        }
    }

    /// Enqueues every process that has arrived by `state.now`.
    fn admit(&mut self, state: &SimulationState) {
        while self.cursor < state.processes.len() && state.has_arrived(self.cursor) {
            let idx = self.cursor;
            if state.remaining_of(idx) > 0 {
                self.push(idx);
            }
            self.cursor += 1;
        }
    }

    fn push(&mut self, idx: usize) {
        if self.queued.insert(idx) {
            self.queue.push_back(idx);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let idx = self.queue.pop_front()?;
        self.queued.remove(&idx);
        Some(idx)
    }

    /// Arrival of the next process not yet admitted.
    fn next_arrival(&self, state: &SimulationState) -> Option<Ticks> {
        state.processes.get(self.cursor).map(|p| p.arrival_ticks())
    }
}

/// Round Robin.
///
/// Processes arriving during a slice join the queue before the preempted
/// process is re-enqueued.
pub(crate) fn round_robin(state: &mut SimulationState, quantum: Ticks) {
    let mut ready = ReadyQueue::new();

    while !state.all_complete() {
        ready.admit(state);

        let Some(idx) = ready.pop() else {
            match ready.next_arrival(state) {
                Some(arrival) => {
                    state.idle_until(arrival);
                    continue;
                }
                None => break,
            }
        };

        state.dispatch(idx);
        let ticks = state.remaining_of(idx).min(quantum);
        let left = state.run(idx, ticks);

        ready.admit(state);
        if left > 0 {
            ready.push(idx);
        }
    }
}
