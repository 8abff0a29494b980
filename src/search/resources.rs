//! Resource tracking for search routines.
//!
//! Exhaustive searches can blow up on a bad input (a large custom graph, a user-supplied
//! budget). Solvers count their work in a [`ResourceTracker`] and stop with
//! [`SearchError::LimitExceeded`] once a configured budget is crossed. The final counters are
//! returned with every result so callers can report how much work a solve took.

use crate::scenario::{ResourceCounts, ResourceLimits, SearchError};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn limits(&self) -> ResourceLimits {
        self.limits
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    /// Forget the counters but keep the limits (used between independent solve calls).
    #[inline]
    pub fn reset(&mut self) {
        self.counts = ResourceCounts::default();
    }

    #[inline]
    pub fn bump_nodes(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(
            stage,
            "nodes",
            delta,
            self.limits.max_nodes,
            |c| &mut c.nodes,
        )
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(
            stage,
            "runtime_steps",
            delta,
            self.limits.max_runtime_steps,
            |c| &mut c.runtime_steps,
        )
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_past_limit_reports_stage_and_counts() {
        let mut tracker = ResourceTracker::new(ResourceLimits {
            max_nodes: 2,
            max_runtime_steps: 10,
        });
        tracker.bump_nodes("unit", 2).unwrap();
        tracker.bump_steps("unit", 3).unwrap();

        match tracker.bump_nodes("unit", 1) {
            Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            }) => {
                assert_eq!(stage, "unit");
                assert_eq!(metric, "nodes");
                assert_eq!(limit, 2);
                assert_eq!(observed, 3);
                assert_eq!(counts.runtime_steps, 3);
            }
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn reset_clears_counters_and_keeps_limits() {
        let limits = ResourceLimits {
            max_nodes: 7,
            max_runtime_steps: 9,
        };
        let mut tracker = ResourceTracker::new(limits);
        tracker.bump_steps("unit", 5).unwrap();
        tracker.reset();
        assert_eq!(tracker.counts(), ResourceCounts::default());
        assert_eq!(tracker.limits(), limits);
    }
}
