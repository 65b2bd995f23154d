//! Scheduling performance metrics.
//!
//! Derives per-process and aggregate metrics from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | CPU Utilization | 100 * total burst / final clock |
//! | Throughput | processes / final clock |
//!
//! Per-process values are clamped at zero. Time values are reported to one
//! decimal; averages, utilization and throughput to two.

use super::state::SimulationState;
use super::Policy;
use crate::models::time::{round_to, to_units, Ticks};
use crate::models::{AlgorithmResult, Process, ProcessMetrics};

const TIME_DECIMALS: u32 = 1;
const RATE_DECIMALS: u32 = 2;

/// Builds the final result of a run, reporting metrics in input order.
pub(crate) fn derive_result(
    policy: Policy,
    inputs: &[Process],
    state: SimulationState,
) -> AlgorithmResult {
    let total: Ticks = state.now;
    let count = inputs.len();

    let mut sum_waiting: Ticks = 0;
    let mut sum_turnaround: Ticks = 0;
    let mut sum_response: Ticks = 0;
    let mut sum_burst: Ticks = 0;

    let metrics: Vec<ProcessMetrics> = inputs
        .iter()
        .map(|p| {
            let arrival = p.arrival_ticks();
            let burst = p.burst_ticks();
            let completion = state.completion.get(&p.id).copied().unwrap_or(0);
            let start = state.first_start.get(&p.id).copied().unwrap_or(0);

            let turnaround = (completion - arrival).max(0);
            let waiting = (turnaround - burst).max(0);
            let response = (start - arrival).max(0);

            sum_waiting += waiting;
            sum_turnaround += turnaround;
            sum_response += response;
            sum_burst += burst;

            ProcessMetrics {
                process: p.clone(),
                start_time: time_value(start),
                completion_time: time_value(completion),
                turnaround_time: time_value(turnaround),
                waiting_time: time_value(waiting),
                response_time: time_value(response),
            }
        })
        .collect();

    let (cpu_utilization, throughput) = if total > 0 {
        (
            100.0 * sum_burst as f64 / total as f64,
            count as f64 / to_units(total),
        )
    } else {
        (0.0, 0.0)
    };

    AlgorithmResult {
        policy,
        timeline: state.timeline.into_slices(),
        metrics,
        avg_waiting_time: average(sum_waiting, count),
        avg_turnaround_time: average(sum_turnaround, count),
        avg_response_time: average(sum_response, count),
        cpu_utilization: round_to(cpu_utilization, RATE_DECIMALS),
        throughput: round_to(throughput, RATE_DECIMALS),
        context_switches: state.switches.count(),
        total_time: time_value(total),
    }
}

fn time_value(ticks: Ticks) -> f64 {
    round_to(to_units(ticks), TIME_DECIMALS)
}

fn average(sum: Ticks, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to(to_units(sum) / count as f64, RATE_DECIMALS)
}
