//! Simulation entry points.
//!
//! # Algorithm
//!
//! 1. Validate the process set and configuration.
//! 2. Snapshot the processes in stable arrival order.
//! 3. Run the policy loop, accumulating slices and bookkeeping.
//! 4. Derive per-process and aggregate metrics.
//!
//! # Complexity
//! O(n²) for the run-to-completion policies and Round Robin admission;
//! O(n · T) for the micro-tick policies, where T is the total burst in ticks.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::metrics::derive_result;
use super::policies;
use super::state::SimulationState;
use super::Policy;
use crate::dispatching::RuleEngine;
use crate::models::time::to_ticks;
use crate::models::{AlgorithmResult, Process};
use crate::validation::{validate_input, ValidationError};

/// Default Round Robin quantum (time units).
pub const DEFAULT_QUANTUM: f64 = 2.0;

/// Default context-switch overhead (time units).
pub const DEFAULT_CONTEXT_SWITCH_OVERHEAD: f64 = 0.1;

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Round Robin quantum (time units). Ignored by other policies.
    pub quantum: f64,
    /// Clock time charged when the CPU passes between two processes.
    pub context_switch_overhead: f64,
}

impl SimulationConfig {
    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the context-switch overhead.
    pub fn with_context_switch_overhead(mut self, overhead: f64) -> Self {
        self.context_switch_overhead = overhead;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            context_switch_overhead: DEFAULT_CONTEXT_SWITCH_OVERHEAD,
        }
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to simulate.
    pub policy: Policy,
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Run configuration.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request with the default configuration.
    pub fn new(policy: Policy, processes: Vec<Process>) -> Self {
        Self {
            policy,
            processes,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the run configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Single-CPU scheduling simulator.
///
/// Each call builds its own state, so one simulator can serve many runs
/// and runs never observe each other.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{Policy, Simulator};
///
/// let processes = vec![Process::new("P1", 0.0, 4.0), Process::new("P2", 1.0, 2.0)];
/// let simulator = Simulator::new().with_context_switch_overhead(0.0);
///
/// let result = simulator.simulate(Policy::Srtf, &processes).unwrap();
/// assert_eq!(result.timeline.len(), 3);
/// assert_eq!(result.metrics_for("P2").unwrap().waiting_time, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.config.quantum = quantum;
        self
    }

    /// Sets the context-switch overhead.
    pub fn with_context_switch_overhead(mut self, overhead: f64) -> Self {
        self.config.context_switch_overhead = overhead;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `policy` over `processes`.
    ///
    /// An empty process set yields [`AlgorithmResult::empty`]. Invalid input
    /// is rejected before any simulation state is built.
    pub fn simulate(
        &self,
        policy: Policy,
        processes: &[Process],
    ) -> Result<AlgorithmResult, Vec<ValidationError>> {
        if let Err(errors) = validate_input(policy, processes, &self.config) {
            warn!(%policy, errors = errors.len(), "simulation input rejected");
            return Err(errors);
        }
        if processes.is_empty() {
            return Ok(AlgorithmResult::empty(policy));
        }

        debug!(%policy, processes = processes.len(), "simulation started");

        let mut state = SimulationState::new(
            processes,
            to_ticks(self.config.context_switch_overhead),
        );
        match (policy, RuleEngine::for_policy(policy)) {
            (Policy::RoundRobin, _) | (_, None) => {
                policies::round_robin(&mut state, to_ticks(self.config.quantum))
            }
            (Policy::Srtf | Policy::PriorityPreemptive, Some(engine)) => {
                policies::micro_tick(&mut state, &engine)
            }
            (Policy::Fcfs | Policy::Sjf | Policy::Priority, Some(engine)) => {
                policies::run_to_completion(&mut state, &engine)
            }
        }

        let result = derive_result(policy, processes, state);
        debug!(
            %policy,
            slices = result.timeline.len(),
            context_switches = result.context_switches,
            total_time = result.total_time,
            "simulation finished"
        );
        Ok(result)
    }

    /// Simulates a request using the request's own configuration.
    pub fn simulate_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<AlgorithmResult, Vec<ValidationError>> {
        Self::with_config(request.config.clone()).simulate(request.policy, &request.processes)
    }

    /// Runs every policy in `policies` over the same processes.
    ///
    /// Results are returned in the order given.
    pub fn compare(
        &self,
        policies: &[Policy],
        processes: &[Process],
    ) -> Result<Vec<AlgorithmResult>, Vec<ValidationError>> {
        policies
            .iter()
            .map(|&policy| self.simulate(policy, processes))
            .collect()
    }
}

/// Simulates `policy` with the given quantum and default switch overhead.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{simulate, Policy};
///
/// let result = simulate(Policy::RoundRobin, &[Process::new("P1", 0.0, 3.0)], 2.0).unwrap();
/// assert_eq!(result.context_switches, 0);
/// assert_eq!(result.total_time, 3.0);
/// ```
pub fn simulate(
    policy: Policy,
    processes: &[Process],
    quantum: f64,
) -> Result<AlgorithmResult, Vec<ValidationError>> {
    Simulator::new().with_quantum(quantum).simulate(policy, processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimelineSlice, IDLE};
    use crate::validation::ValidationErrorKind;
    use crate::workload::WorkloadGenerator;

    fn no_overhead() -> Simulator {
        Simulator::new().with_context_switch_overhead(0.0)
    }

    fn two_processes() -> Vec<Process> {
        vec![Process::new("P1", 0.0, 4.0), Process::new("P2", 1.0, 2.0)]
    }

    fn random_workloads() -> Vec<Vec<Process>> {
        (0..20)
            .map(|seed| WorkloadGenerator::new(seed).with_count(6).generate())
            .collect()
    }

    // ---------------------------------------------------------------- scenarios

    #[test]
    fn test_scenario_fcfs() {
        let r = no_overhead().simulate(Policy::Fcfs, &two_processes()).unwrap();
        assert_eq!(
            r.timeline,
            vec![
                TimelineSlice::new("P1", 0.0, 4.0),
                TimelineSlice::new("P2", 4.0, 6.0),
            ]
        );
        assert_eq!(r.metrics_for("P1").unwrap().waiting_time, 0.0);
        assert_eq!(r.metrics_for("P2").unwrap().waiting_time, 3.0);
        assert_eq!(r.context_switches, 1);
    }

    #[test]
    fn test_scenario_sjf_non_preemptive() {
        let r = no_overhead().simulate(Policy::Sjf, &two_processes()).unwrap();
        assert_eq!(
            r.timeline,
            vec![
                TimelineSlice::new("P1", 0.0, 4.0),
                TimelineSlice::new("P2", 4.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_scenario_srtf() {
        let r = no_overhead().simulate(Policy::Srtf, &two_processes()).unwrap();
        assert_eq!(
            r.timeline,
            vec![
                TimelineSlice::new("P1", 0.0, 1.0),
                TimelineSlice::new("P2", 1.0, 3.0),
                TimelineSlice::new("P1", 3.0, 6.0),
            ]
        );
        assert_eq!(r.context_switches, 2);
        assert_eq!(r.metrics_for("P1").unwrap().waiting_time, 2.0);
        assert_eq!(r.metrics_for("P2").unwrap().response_time, 0.0);
    }

    #[test]
    fn test_scenario_round_robin() {
        let r = no_overhead()
            .with_quantum(2.0)
            .simulate(Policy::RoundRobin, &two_processes())
            .unwrap();
        assert_eq!(
            r.timeline,
            vec![
                TimelineSlice::new("P1", 0.0, 2.0),
                TimelineSlice::new("P2", 2.0, 4.0),
                TimelineSlice::new("P1", 4.0, 6.0),
            ]
        );
        assert_eq!(r.metrics_for("P2").unwrap().response_time, 1.0);
    }

    #[test]
    fn test_empty_input() {
        for policy in Policy::ALL {
            let r = simulate(policy, &[], 2.0).unwrap();
            assert_eq!(r, AlgorithmResult::empty(policy));
        }
    }

    // ---------------------------------------------------------------- overhead

    #[test]
    fn test_default_overhead_shifts_dispatch() {
        let r = simulate(Policy::Fcfs, &two_processes(), 2.0).unwrap();
        assert_eq!(
            r.timeline,
            vec![
                TimelineSlice::new("P1", 0.0, 4.0),
                TimelineSlice::new("P2", 4.1, 6.1),
            ]
        );
        assert_eq!(r.context_switches, 1);
        assert_eq!(r.total_time, 6.1);
        assert_eq!(r.metrics_for("P2").unwrap().waiting_time, 3.1);
        assert!(r.slice_at(4.05).is_none());
        assert_eq!(r.cpu_utilization, 98.36);
    }

    #[test]
    fn test_default_overhead_srtf() {
        let r = simulate(Policy::Srtf, &two_processes(), 2.0).unwrap();
        assert_eq!(
            r.timeline,
            vec![
                TimelineSlice::new("P1", 0.0, 1.0),
                TimelineSlice::new("P2", 1.1, 3.1),
                TimelineSlice::new("P1", 3.2, 6.2),
            ]
        );
        assert_eq!(r.context_switches, 2);
    }

    #[test]
    fn test_idle_resets_switch_baseline() {
        // P1 finishes, CPU idles, P2 starts: no switch charged across idle.
        let processes = vec![Process::new("P1", 0.0, 1.0), Process::new("P2", 3.0, 1.0)];
        for policy in Policy::ALL {
            let r = simulate(policy, &processes, 2.0).unwrap();
            assert_eq!(r.context_switches, 0, "{policy}");
            assert_eq!(r.metrics_for("P2").unwrap().start_time, 3.0, "{policy}");
        }
    }

    #[test]
    fn test_round_robin_idle_gap_not_charged() {
        let processes = vec![Process::new("P1", 0.0, 1.0), Process::new("P2", 5.0, 2.0)];
        let r = simulate(Policy::RoundRobin, &processes, 1.0).unwrap();
        assert_eq!(r.context_switches, 0);
        assert_eq!(
            r.timeline,
            vec![
                TimelineSlice::new("P1", 0.0, 1.0),
                TimelineSlice::new(IDLE, 1.0, 5.0),
                TimelineSlice::new("P2", 5.0, 7.0),
            ]
        );
    }

    #[test]
    fn test_switch_counted_with_zero_overhead() {
        let r = no_overhead().simulate(Policy::RoundRobin, &two_processes()).unwrap();
        assert_eq!(r.context_switches, 2);
        assert_eq!(r.total_time, 6.0);
    }

    // ---------------------------------------------------------------- validation

    #[test]
    fn test_rejects_invalid_quantum() {
        let errors = simulate(Policy::RoundRobin, &two_processes(), 0.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let processes = vec![Process::new("P1", 0.0, 1.0), Process::new("P1", 1.0, 1.0)];
        assert!(simulate(Policy::Fcfs, &processes, 2.0).is_err());
    }

    #[test]
    fn test_rejects_huge_times_without_panicking() {
        let errors = simulate(Policy::Fcfs, &[Process::new("P1", 1.0e18, 1.0)], 2.0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrival);

        let errors = simulate(Policy::Srtf, &[Process::new("P1", 0.0, 1.0e12)], 2.0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_rejects_times_between_ticks() {
        let long = vec![Process::new("P1", 0.0, 4.0), Process::new("P2", 0.0, 4.0)];
        let errors = no_overhead()
            .with_quantum(1.55)
            .simulate(Policy::RoundRobin, &long)
            .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);

        let errors = Simulator::new()
            .with_context_switch_overhead(0.04)
            .simulate(Policy::Fcfs, &long)
            .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidOverhead);

        let errors = simulate(Policy::Fcfs, &[Process::new("P1", 0.0, 0.06)], 2.0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_rejects_zero_burst() {
        let processes = vec![Process::new("P1", 0.0, 0.0)];
        let errors = simulate(Policy::Srtf, &processes, 2.0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurst);
    }

    // ---------------------------------------------------------------- requests

    #[test]
    fn test_simulate_request_uses_request_config() {
        let request = SimulationRequest::new(Policy::RoundRobin, two_processes()).with_config(
            SimulationConfig::default()
                .with_quantum(4.0)
                .with_context_switch_overhead(0.0),
        );
        let r = Simulator::new().with_quantum(1.0).simulate_request(&request).unwrap();
        assert_eq!(r.timeline[0], TimelineSlice::new("P1", 0.0, 4.0));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "policy": "PRIORITY",
            "processes": [
                {"id": "A", "arrivalTime": 0, "burstTime": 2, "priority": 2},
                {"id": "B", "arrivalTime": 0, "burstTime": 1, "priority": 1, "color": "red"}
            ],
            "config": {"contextSwitchOverhead": 0}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.config.quantum, DEFAULT_QUANTUM);

        let r = Simulator::new().simulate_request(&request).unwrap();
        assert_eq!(r.timeline[0].process_id, "B");

        let out = serde_json::to_value(&r).unwrap();
        assert_eq!(out["policy"], "PRIORITY");
        assert_eq!(out["metrics"][1]["color"], "red");
        assert!(out["avgWaitingTime"].is_number());
    }

    #[test]
    fn test_compare_runs_each_policy() {
        let results = Simulator::new()
            .compare(&Policy::ALL, &two_processes())
            .unwrap();
        let policies: Vec<Policy> = results.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_caller_records_untouched() {
        let processes = vec![Process::new("P2", 1.0, 2.0), Process::new("P1", 0.0, 4.0)];
        let before = processes.clone();
        let r = simulate(Policy::Srtf, &processes, 2.0).unwrap();
        assert_eq!(processes, before);
        assert_eq!(r.metrics[0].id(), "P2");
    }

    // ---------------------------------------------------------------- properties

    #[test]
    fn test_timeline_ordered_and_merged() {
        for processes in random_workloads() {
            for policy in Policy::ALL {
                let r = simulate(policy, &processes, 1.5).unwrap();
                for s in &r.timeline {
                    assert!(s.end_time > s.start_time, "{policy}: empty slice");
                }
                for pair in r.timeline.windows(2) {
                    assert!(pair[0].end_time <= pair[1].start_time + 1e-9, "{policy}: overlap");
                    assert_ne!(pair[0].process_id, pair[1].process_id, "{policy}: unmerged");
                }
            }
        }
    }

    #[test]
    fn test_metric_identities() {
        for processes in random_workloads() {
            for policy in Policy::ALL {
                let r = simulate(policy, &processes, 1.5).unwrap();
                assert_eq!(r.metrics.len(), processes.len());
                for m in &r.metrics {
                    assert!(m.waiting_time >= 0.0 && m.turnaround_time >= 0.0);
                    assert!(m.response_time >= 0.0);
                    assert!(
                        (m.waiting_time + m.process.burst_time - m.turnaround_time).abs() < 1e-9,
                        "{policy}: {}",
                        m.id()
                    );
                    assert!(m.response_time <= m.waiting_time + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_slice_time_accounts_for_clock() {
        for processes in random_workloads() {
            let total_burst: f64 = processes.iter().map(|p| p.burst_time).sum();
            for policy in Policy::ALL {
                let r = simulate(policy, &processes, 1.5).unwrap();
                assert!((r.busy_time() - total_burst).abs() < 1e-6, "{policy}");

                let overhead = r.context_switches as f64 * DEFAULT_CONTEXT_SWITCH_OVERHEAD;
                let slice_total = r.busy_time() + r.idle_time();
                assert!((slice_total + overhead - r.total_time).abs() < 1e-6, "{policy}");

                let flat = no_overhead().with_quantum(1.5).simulate(policy, &processes).unwrap();
                assert!((flat.busy_time() + flat.idle_time() - flat.total_time).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_fcfs_deterministic_and_order_independent() {
        for processes in random_workloads() {
            let first = simulate(Policy::Fcfs, &processes, 2.0).unwrap();
            let second = simulate(Policy::Fcfs, &processes, 2.0).unwrap();
            assert_eq!(first, second);

            let mut arrivals: Vec<i64> = processes.iter().map(Process::arrival_ticks).collect();
            arrivals.sort_unstable();
            arrivals.dedup();
            if arrivals.len() < processes.len() {
                continue;
            }

            let mut reversed = processes.clone();
            reversed.reverse();
            let rev = simulate(Policy::Fcfs, &reversed, 2.0).unwrap();
            assert_eq!(first.timeline, rev.timeline);
            for m in &first.metrics {
                assert_eq!(Some(m), rev.metrics_for(m.id()));
            }
        }
    }

    #[test]
    fn test_fcfs_non_preemptive() {
        for processes in random_workloads() {
            for policy in [Policy::Fcfs, Policy::Sjf, Policy::Priority] {
                let r = simulate(policy, &processes, 2.0).unwrap();
                let runs = r.timeline.iter().filter(|s| !s.is_idle()).count();
                assert_eq!(runs, processes.len(), "{policy}");
            }
        }
    }

    #[test]
    fn test_srtf_never_runs_longer_job_past_shorter_arrival() {
        for processes in random_workloads() {
            let r = no_overhead().simulate(Policy::Srtf, &processes).unwrap();
            for s in r.timeline.iter().filter(|s| !s.is_idle()) {
                let running = r.metrics_for(&s.process_id).unwrap();
                // Remaining work of the running process at the start of the slice.
                let done_before: f64 = r
                    .timeline
                    .iter()
                    .filter(|o| o.process_id == s.process_id && o.end_time <= s.start_time)
                    .map(TimelineSlice::duration)
                    .sum();
                let remaining = running.process.burst_time - done_before;

                for other in &processes {
                    let arrives_inside =
                        other.arrival_time > s.start_time && other.arrival_time < s.end_time;
                    let left_at_arrival =
                        remaining - (other.arrival_time - s.start_time);
                    if arrives_inside {
                        assert!(
                            other.burst_time >= left_at_arrival - 1e-9,
                            "{} waited while {} ran",
                            other.id,
                            s.process_id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_robin_slices_bounded_by_quantum() {
        let quantum = 1.5;
        for processes in random_workloads() {
            let r = no_overhead()
                .with_quantum(quantum)
                .simulate(Policy::RoundRobin, &processes)
                .unwrap();

            // A slice longer than the quantum is several back-to-back
            // dispatches of a process nobody else was waiting behind.
            for s in r.timeline.iter().filter(|s| s.duration() > quantum + 1e-9) {
                if s.is_idle() {
                    continue;
                }
                let boundary = s.start_time + quantum;
                for other in r.metrics.iter().filter(|m| m.id() != s.process_id) {
                    let ready_at_boundary = other.process.arrival_time <= boundary + 1e-9
                        && other.completion_time > s.start_time + 1e-9;
                    assert!(
                        !ready_at_boundary,
                        "{} held the CPU past its quantum while {} was ready",
                        s.process_id,
                        other.id()
                    );
                }
            }
        }
    }
}
