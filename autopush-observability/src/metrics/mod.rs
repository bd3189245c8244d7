//! Push metrics.
//!
//! [`PushMetrics`] is shared by every request handler, so all counters are
//! relaxed atomics. [`PushMetrics::snapshot`] gives a serializable copy.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for the record and query paths.
#[derive(Debug, Default)]
pub struct PushMetrics {
    primary_requests: AtomicU64,
    attributed_assets: AtomicU64,
    unattributed_assets: AtomicU64,
    queries: AtomicU64,
    queries_with_candidates: AtomicU64,
    candidates_returned: AtomicU64,
    promotions: AtomicU64,
    demotions: AtomicU64,
    sessions_closed: AtomicU64,
}

/// Point-in-time copy of [`PushMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub primary_requests: u64,
    pub attributed_assets: u64,
    pub unattributed_assets: u64,
    pub queries: u64,
    pub queries_with_candidates: u64,
    pub candidates_returned: u64,
    pub promotions: u64,
    pub demotions: u64,
    pub sessions_closed: u64,
}

impl MetricsSnapshot {
    /// Fraction of queries that produced at least one candidate.
    pub fn hit_rate(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.queries_with_candidates as f64 / self.queries as f64
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl PushMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_primary(&self) {
        self.primary_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_attributed_asset(&self) {
        self.attributed_assets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unattributed_asset(&self) {
        self.unattributed_assets.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one query and how many candidates it returned.
    pub fn record_query(&self, returned: usize) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if returned > 0 {
            self.queries_with_candidates.fetch_add(1, Ordering::Relaxed);
            self.candidates_returned
                .fetch_add(returned as u64, Ordering::Relaxed);
        }
    }

    pub fn record_promotion(&self) {
        self.promotions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_demotion(&self) {
        self.demotions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_session_closed(&self) {
        self.sessions_closed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            primary_requests: self.primary_requests.load(Ordering::Relaxed),
            attributed_assets: self.attributed_assets.load(Ordering::Relaxed),
            unattributed_assets: self.unattributed_assets.load(Ordering::Relaxed),
            queries: self.queries.load(Ordering::Relaxed),
            queries_with_candidates: self.queries_with_candidates.load(Ordering::Relaxed),
            candidates_returned: self.candidates_returned.load(Ordering::Relaxed),
            promotions: self.promotions.load(Ordering::Relaxed),
            demotions: self.demotions.load(Ordering::Relaxed),
            sessions_closed: self.sessions_closed.load(Ordering::Relaxed),
        }
    }
}
