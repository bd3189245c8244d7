//! Push ordering: most confident predictions first.

use serde::{Deserialize, Serialize};

use super::engine::{Evaluation, PromotionEngine};

/// A child that currently qualifies for push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushCandidate {
    pub path: String,
    pub ratio: f64,
    pub count: u64,
}

/// Keep qualifying children and order them by descending ratio, then
/// descending count, then path.
pub fn rank(evaluations: Vec<(String, Evaluation)>) -> Vec<PushCandidate> {
    let mut candidates: Vec<PushCandidate> = evaluations
        .into_iter()
        .filter(|(_, e)| PromotionEngine::qualifies(e.current))
        .map(|(path, e)| PushCandidate {
            path,
            ratio: e.ratio,
            count: e.counters.child_count,
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.ratio
            .partial_cmp(&a.ratio)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.path.cmp(&b.path))
    });
    candidates
}
