//! Process model.
//!
//! A process is a unit of CPU demand: it arrives at a point in time and
//! needs a fixed amount of CPU time (its burst) before it completes.

use serde::{Deserialize, Serialize};

use super::time::{to_ticks, Ticks};

/// A process to be scheduled.
///
/// Records are owned by the caller and never mutated by the engine;
/// remaining work is tracked separately during simulation.
///
/// # Time Representation
/// Times are in abstract time units relative to the simulation epoch (t=0),
/// resolved internally to 0.1-unit ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: f64,
    /// Total CPU time required.
    pub burst_time: f64,
    /// Scheduling priority (lower value = more important).
    pub priority: i32,
    /// Display colour. Ignored by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Process {
    /// Creates a process with priority 0 and no colour.
    pub fn new(id: impl Into<String>, arrival_time: f64, burst_time: f64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            color: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the display colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Arrival time in ticks.
    #[inline]
    pub fn arrival_ticks(&self) -> Ticks {
        to_ticks(self.arrival_time)
    }

    /// Burst time in ticks.
    #[inline]
    pub fn burst_ticks(&self) -> Ticks {
        to_ticks(self.burst_time)
    }
}
