//! Simulation result model.
//!
//! [`AlgorithmResult`] is the sole artifact handed to presentation layers:
//! the timeline, per-process metrics and aggregate statistics of one
//! policy run.

use serde::{Deserialize, Serialize};

use super::{Process, TimelineSlice};
use crate::scheduler::Policy;

/// A process together with its derived scheduling metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    /// The input process.
    #[serde(flatten)]
    pub process: Process,
    /// Time of first dispatch.
    pub start_time: f64,
    /// Time at which the last unit of work finished.
    pub completion_time: f64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: f64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: f64,
    /// `start_time - arrival_time`.
    pub response_time: f64,
}

impl ProcessMetrics {
    /// Process id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }
}

/// Outcome of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Time-ordered, non-overlapping CPU occupancy slices.
    pub timeline: Vec<TimelineSlice>,
    /// Metrics for every input process, in input order.
    pub metrics: Vec<ProcessMetrics>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Busy share of the total elapsed time (%).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of charged context switches.
    pub context_switches: usize,
    /// Final clock value, including switch overhead.
    pub total_time: f64,
}

impl AlgorithmResult {
    /// Zero-valued result for an empty workload.
    pub fn empty(policy: Policy) -> Self {
        Self {
            policy,
            timeline: Vec::new(),
            metrics: Vec::new(),
            avg_waiting_time: 0.0,
            avg_turnaround_time: 0.0,
            avg_response_time: 0.0,
            cpu_utilization: 0.0,
            throughput: 0.0,
            context_switches: 0,
            total_time: 0.0,
        }
    }

    /// The slice occupying the CPU at `time`, if any.
    ///
    /// Returns `None` past the end of the timeline and inside
    /// context-switch gaps.
    pub fn slice_at(&self, time: f64) -> Option<&TimelineSlice> {
        self.timeline.iter().find(|s| s.contains(time))
    }

    /// Metrics for the given process.
    pub fn metrics_for(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.id() == process_id)
    }

    /// End of the last slice.
    pub fn makespan(&self) -> f64 {
        self.timeline.last().map(|s| s.end_time).unwrap_or(0.0)
    }

    /// Total length of idle slices.
    pub fn idle_time(&self) -> f64 {
        self.timeline
            .iter()
            .filter(|s| s.is_idle())
            .map(TimelineSlice::duration)
            .sum()
    }

    /// Total length of non-idle slices.
    pub fn busy_time(&self) -> f64 {
        self.timeline
            .iter()
            .filter(|s| !s.is_idle())
            .map(TimelineSlice::duration)
            .sum()
    }
}
