//! CPU occupancy timeline.
//!
//! A timeline is an ordered, non-overlapping sequence of slices, each
//! naming the process (or the idle sentinel) that held the CPU during a
//! half-open interval `[start, end)`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::time::{to_units, Ticks};

/// Process id used for intervals in which no process was eligible.
pub const IDLE: &str = "IDLE";

/// One contiguous CPU occupancy interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSlice {
    /// Process id, or [`IDLE`].
    pub process_id: String,
    /// Start time (inclusive).
    pub start_time: f64,
    /// End time (exclusive).
    pub end_time: f64,
}

impl TimelineSlice {
    /// Creates a slice.
    pub fn new(process_id: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether this is an idle interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id == IDLE
    }

    /// Whether `time` falls within `[start_time, end_time)`.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawSlice {
    process_id: String,
    start: Ticks,
    end: Ticks,
}

/// Accumulates slices during a simulation run.
///
/// Adjacent records for the same process collapse into one slice, which
/// keeps tick-by-tick preemptive runs compact. Zero-length records are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    slices: Vec<RawSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `process_id` held the CPU during `[start, end)`.
    ///
    /// Extends the trailing slice instead of appending when it belongs to
    /// the same process.
    pub fn record(&mut self, process_id: &str, start: Ticks, end: Ticks) {
        if start >= end {
            return;
        }
        trace!(process = process_id, start, end, "record slice");

        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id {
                last.end = end;
                return;
            }
        }
        self.slices.push(RawSlice {
            process_id: process_id.to_string(),
            start,
            end,
        });
    }

    /// Records an idle interval.
    pub fn record_idle(&mut self, start: Ticks, end: Ticks) {
        self.record(IDLE, start, end);
    }

    /// Number of slices recorded so far.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Converts the accumulated slices to time units.
    pub fn into_slices(self) -> Vec<TimelineSlice> {
        self.slices
            .into_iter()
            .map(|s| TimelineSlice {
                process_id: s.process_id,
                start_time: to_units(s.start),
                end_time: to_units(s.end),
            })
            .collect()
    }
}
