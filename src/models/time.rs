//! Simulation time base.
//!
//! The engine counts time in integer ticks of 0.1 time units. Callers
//! speak `f64` time units; input values must lie on the tick grid and
//! are converted on the way in and back on the way out, so no
//! floating-point drift accumulates across the fine-grained preemptive
//! loops.

/// Simulation time in ticks (tenths of a time unit).
pub type Ticks = i64;

/// Number of ticks per time unit.
pub const TICKS_PER_UNIT: i64 = 10;

/// Largest accepted arrival, burst, quantum or overhead, in time units.
///
/// Keeps every reachable clock value far inside `Ticks` and bounds the
/// length of the one-tick preemptive loops.
pub const MAX_TIME: f64 = 1_000_000.0;

/// Converts time units to ticks, rounding to the nearest tick.
#[inline]
pub fn to_ticks(units: f64) -> Ticks {
    (units * TICKS_PER_UNIT as f64).round() as Ticks
}

/// Converts ticks back to time units.
#[inline]
pub fn to_units(ticks: Ticks) -> f64 {
    ticks as f64 / TICKS_PER_UNIT as f64
}

/// Whether `units` is a finite value that falls exactly on a tick.
pub fn on_grid(units: f64) -> bool {
    if !units.is_finite() {
        return false;
    }
    let scaled = units * TICKS_PER_UNIT as f64;
    (scaled - scaled.round()).abs() < 1e-6
}

/// Rounds `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
