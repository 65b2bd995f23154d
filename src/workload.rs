//! Random workload generation.
//!
//! Produces valid, reproducible process sets for demos, policy comparisons
//! and property tests. All generated times fall on the 0.1-unit tick grid.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::time::{to_ticks, to_units, Ticks};
use crate::models::Process;

/// Display colours assigned to generated processes.
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// Seeded generator of random process sets.
///
/// # Example
/// ```
/// use u_cpu_schedule::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(7).with_count(4).generate();
/// let b = WorkloadGenerator::new(7).with_count(4).generate();
/// assert_eq!(a, b);
/// assert_eq!(a[0].id, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    max_arrival: f64,
    min_burst: f64,
    max_burst: f64,
    min_priority: i32,
    max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator: 5 processes, arrivals in [0, 10], bursts in
    /// [1, 8], priorities in [1, 5].
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 5,
            max_arrival: 10.0,
            min_burst: 1.0,
            max_burst: 8.0,
            min_priority: 1,
            max_priority: 5,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: f64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min: f64, max: f64) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the priority range (inclusive).
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Generates processes `P1..Pn` from the configured seed.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates processes using the supplied RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = to_ticks(self.max_arrival).max(0);
        let (burst_lo, burst_hi) = ordered(
            to_ticks(self.min_burst).max(1),
            to_ticks(self.max_burst).max(1),
        );
        let (prio_lo, prio_hi) = ordered(self.min_priority, self.max_priority);

        (1..=self.count)
            .map(|n| {
                let arrival: Ticks = rng.random_range(0..=max_arrival);
                let burst: Ticks = rng.random_range(burst_lo..=burst_hi);
                let priority = rng.random_range(prio_lo..=prio_hi);
                let mut process =
                    Process::new(format!("P{n}"), to_units(arrival), to_units(burst))
                        .with_priority(priority);
                if let Some(color) = PALETTE.choose(rng) {
                    process = process.with_color(*color);
                }
                process
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
