//! Input validation for simulation requests.
//!
//! Checks a process set and its run configuration before any simulation
//! state is built. Detects:
//! - Duplicate, blank or reserved process IDs
//! - Negative or non-finite arrival times
//! - Non-positive bursts
//! - Non-positive Round Robin quanta
//! - Negative context-switch overhead
//! - Any of the above that falls between ticks or exceeds [`MAX_TIME`]
//!
//! The simulation loops assume validated input; a zero-length burst or a
//! zero quantum would otherwise produce ghost dispatches or never finish.

use std::collections::HashSet;
use std::fmt;

use crate::models::time::{on_grid, to_ticks, MAX_TIME};
use crate::models::{Process, IDLE};
use crate::scheduler::{Policy, SimulationConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is blank.
    EmptyId,
    /// A process ID collides with the idle sentinel.
    ReservedId,
    /// Arrival time is negative, off the tick grid or too large.
    InvalidArrival,
    /// Burst time is not positive, off the tick grid or too large.
    InvalidBurst,
    /// Round Robin quantum is not positive, off the tick grid or too large.
    InvalidQuantum,
    /// Context-switch overhead is negative, off the tick grid or too large.
    InvalidOverhead,
    /// Policy identifier not recognised.
    UnknownPolicy,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a simulation request.
///
/// Checks:
/// 1. Process IDs are non-blank, unique and not `IDLE`
/// 2. Arrival times are non-negative
/// 3. Burst times are at least one tick (0.1)
/// 4. The quantum is at least one tick (Round Robin only)
/// 5. The context-switch overhead is non-negative
///
/// Every time value must also be a multiple of 0.1 and at most
/// [`MAX_TIME`].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    policy: Policy,
    processes: &[Process],
    config: &SimulationConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for p in processes {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process ID must not be blank",
            ));
        } else if p.id == IDLE {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                format!("Process ID '{IDLE}' is reserved for idle slices"),
            ));
        }

        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if !in_range(p.arrival_time, 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!(
                    "Process '{}' has invalid arrival time {} (0 to {MAX_TIME}, step 0.1)",
                    p.id, p.arrival_time
                ),
            ));
        }

        if !in_range(p.burst_time, 0.1) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!(
                    "Process '{}' has invalid burst time {} (0.1 to {MAX_TIME}, step 0.1)",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if policy.uses_quantum() && !in_range(config.quantum, 0.1) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!(
                "Quantum must be 0.1 to {MAX_TIME} in steps of 0.1, got {}",
                config.quantum
            ),
        ));
    }

    let overhead = config.context_switch_overhead;
    if !in_range(overhead, 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOverhead,
            format!(
                "Context-switch overhead must be 0 to {MAX_TIME} in steps of 0.1, got {overhead}"
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `units` lies on the tick grid within `[min, MAX_TIME]`.
fn in_range(units: f64, min: f64) -> bool {
    on_grid(units) && to_ticks(units) >= to_ticks(min) && units <= MAX_TIME
}
