//! Pure lifecycle transitions. No clocks, no shared state.

use autopush_core::models::ChildState;

use super::thresholds::Thresholds;
use crate::ratio::ratio;

/// Counter values read from a root and one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub root_count: u64,
    pub child_count: u64,
}

impl Counters {
    pub fn new(root_count: u64, child_count: u64) -> Self {
        Self {
            root_count,
            child_count,
        }
    }

    /// Clamped `child_count / root_count`.
    pub fn ratio(&self) -> f64 {
        ratio(self.child_count, self.root_count)
    }
}

/// Next state of a child given its current state, counters, and the age of
/// its root.
///
/// Promotion requires the ratio to reach the promotion threshold, the root
/// to have been seen at least `minimum_requests` times, and the warmup to
/// have elapsed. Demotion happens only at or below the demotion threshold.
pub fn next_state(
    current: ChildState,
    thresholds: &Thresholds,
    counters: Counters,
    root_age: chrono::Duration,
) -> ChildState {
    let ratio = counters.ratio();
    match current {
        ChildState::Tracking | ChildState::Demoted => {
            let eligible = counters.root_count >= thresholds.minimum_requests()
                && root_age >= thresholds.warmup();
            if eligible && ratio >= thresholds.promotion_ratio() {
                ChildState::Promoted
            } else {
                current
            }
        }
        ChildState::Promoted => {
            if ratio <= thresholds.demotion_ratio() {
                ChildState::Demoted
            } else {
                ChildState::Promoted
            }
        }
    }
}
