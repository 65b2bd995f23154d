//! Rule engine for multi-layer process selection.
//!
//! Applies rules in sequence, consulting the next rule only when the
//! previous one ties. Candidates tied on every rule keep their scan order,
//! so a scan in arrival order resolves full ties to the earliest record.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, SelectionContext, SelectionRule};
use crate::models::Process;
use crate::scheduler::Policy;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpu_schedule::dispatching::RuleEngine;
/// use u_cpu_schedule::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityValue)
///     .with_tie_breaker(rules::ArrivalOrder);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Engine used by a score-driven policy.
    ///
    /// Every policy breaks ties on earlier arrival. Returns `None` for
    /// Round Robin, which selects by queue position instead of score.
    pub fn for_policy(policy: Policy) -> Option<Self> {
        let engine = match policy {
            Policy::Fcfs => Self::new().with_rule(rules::ArrivalOrder),
            Policy::Sjf => Self::new().with_rule(rules::ShortestBurst),
            Policy::Srtf => Self::new().with_rule(rules::ShortestRemaining),
            Policy::Priority | Policy::PriorityPreemptive => {
                Self::new().with_rule(rules::PriorityValue)
            }
            Policy::RoundRobin => return None,
        };
        Some(engine.with_tie_breaker(rules::ArrivalOrder))
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the index of the best candidate among `eligible`.
    ///
    /// `eligible` yields indices into `processes`; on a full tie the
    /// candidate yielded first wins.
    pub fn select_best(
        &self,
        processes: &[Process],
        eligible: impl IntoIterator<Item = usize>,
        context: &SelectionContext<'_>,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for idx in eligible {
            best = match best {
                Some(b) if self.compare(&processes[idx], &processes[b], context)
                    != Ordering::Less =>
                {
                    Some(b)
                }
                _ => Some(idx),
            };
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process, context: &SelectionContext<'_>) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a, context).cmp(&rule.evaluate(b, context)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
