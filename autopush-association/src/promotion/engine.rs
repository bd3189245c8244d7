//! PromotionEngine: applies lifecycle transitions to live entries.
//!
//! Evaluation is pull-based: callers run it after recording a child and on
//! every query. It holds no timers.

use chrono::{DateTime, Utc};

use autopush_core::config::CacheConfig;
use autopush_core::errors::ConfigError;
use autopush_core::models::ChildState;

use super::thresholds::Thresholds;
use super::transition::{self, Counters};
use crate::entry::{ChildEntry, RootEntry};
use crate::store::AssociationStore;

/// Outcome of evaluating one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub previous: ChildState,
    pub current: ChildState,
    pub counters: Counters,
    pub ratio: f64,
}

impl Evaluation {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }

    /// This evaluation moved the child into `Promoted`.
    pub fn promoted(&self) -> bool {
        self.changed() && self.current == ChildState::Promoted
    }

    /// This evaluation moved the child into `Demoted`.
    pub fn demoted(&self) -> bool {
        self.changed() && self.current == ChildState::Demoted
    }
}

/// Decision logic for every (root, child) pair of one asset cache.
#[derive(Debug, Clone)]
pub struct PromotionEngine {
    thresholds: Thresholds,
}

impl PromotionEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Build from a config, validating it.
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        Thresholds::from_config(config).map(Self::new)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Pure transition for the given inputs.
    pub fn next_state(
        &self,
        current: ChildState,
        counters: Counters,
        root_age: chrono::Duration,
    ) -> ChildState {
        transition::next_state(current, &self.thresholds, counters, root_age)
    }

    /// Whether a child in `state` should be pushed.
    pub fn qualifies(state: ChildState) -> bool {
        state == ChildState::Promoted
    }

    /// Recompute one child's state from live counters and store it.
    ///
    /// Concurrent evaluations of the same child converge: a lost
    /// compare-and-swap re-reads and recomputes.
    pub fn evaluate(
        &self,
        root_path: &str,
        root: &RootEntry,
        child_path: &str,
        child: &ChildEntry,
        now: DateTime<Utc>,
    ) -> Evaluation {
        let root_age = root.age(now);
        loop {
            let previous = child.state();
            let counters = Counters::new(root.root_count(), child.count());
            let current = self.next_state(previous, counters, root_age);
            let evaluation = Evaluation {
                previous,
                current,
                counters,
                ratio: counters.ratio(),
            };

            if !evaluation.changed() {
                return evaluation;
            }
            if child.transition(previous, current) {
                log_transition(root_path, child_path, &evaluation);
                return evaluation;
            }
        }
    }

    /// Evaluate every child of `root_path`. Empty when the root is unknown.
    pub fn evaluate_root(
        &self,
        store: &AssociationStore,
        root_path: &str,
        now: DateTime<Utc>,
    ) -> Vec<(String, Evaluation)> {
        let Some(root) = store.root(root_path) else {
            return Vec::new();
        };
        store
            .list_children(root_path)
            .into_iter()
            .map(|(child_path, child)| {
                let evaluation = self.evaluate(root_path, &root, &child_path, &child, now);
                (child_path, evaluation)
            })
            .collect()
    }
}

fn log_transition(root_path: &str, child_path: &str, evaluation: &Evaluation) {
    if evaluation.promoted() {
        tracing::info!(
            event = "child_promoted",
            root = %root_path,
            child = %child_path,
            ratio = evaluation.ratio,
            root_count = evaluation.counters.root_count,
            from = %evaluation.previous,
            "asset promoted"
        );
    } else if evaluation.demoted() {
        tracing::info!(
            event = "child_demoted",
            root = %root_path,
            child = %child_path,
            ratio = evaluation.ratio,
            root_count = evaluation.counters.root_count,
            "asset demoted"
        );
    }
}
