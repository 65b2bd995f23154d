//! Scheduling policy identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// A CPU scheduling policy.
///
/// | Policy | Granularity | Selection | Preemptive |
/// |--------|-------------|-----------|------------|
/// | `Fcfs` | run to completion | arrival | no |
/// | `Sjf` | run to completion | burst | no |
/// | `Priority` | run to completion | priority value | no |
/// | `Srtf` | 0.1 tick | remaining burst | every tick |
/// | `PriorityPreemptive` | 0.1 tick | priority value | every tick |
/// | `RoundRobin` | ≤ quantum | FIFO queue | at quantum end |
///
/// Ties on the primary key always go to the earlier arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First Come First Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest Remaining Time First.
    #[serde(rename = "SRTF")]
    Srtf,
    /// Priority (non-preemptive).
    #[serde(rename = "PRIORITY")]
    Priority,
    /// Priority (preemptive).
    #[serde(rename = "PRIORITY_PREEMPTIVE")]
    PriorityPreemptive,
    /// Round Robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Policy {
    /// All policies, in display order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::Priority,
        Policy::PriorityPreemptive,
        Policy::RoundRobin,
    ];

    /// Short identifier (e.g., "SRTF").
    pub fn id(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::Priority => "PRIORITY",
            Policy::PriorityPreemptive => "PRIORITY_PREEMPTIVE",
            Policy::RoundRobin => "RR",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First Come First Served",
            Policy::Sjf => "Shortest Job First",
            Policy::Srtf => "Shortest Remaining Time First",
            Policy::Priority => "Priority (Non-Preemptive)",
            Policy::PriorityPreemptive => "Priority (Preemptive)",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can be displaced before it completes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::Srtf | Policy::PriorityPreemptive | Policy::RoundRobin
        )
    }

    /// Whether the policy consults the quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Policy {
    type Err = ValidationError;

    /// Parses a policy identifier, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Policy::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownPolicy,
                    format!("Unknown policy: {s}"),
                )
            })
    }
}
