//! Caller-driven maintenance. Nothing here runs on its own.

use chrono::{DateTime, Duration, Utc};

use autopush_association::PromotionEngine;
use autopush_observability::maintenance_span;
use autopush_observability::tracing_setup::events;

use crate::cache::AssetCache;

impl AssetCache {
    /// Remove sessions idle for longer than `max_idle`. For serving layers
    /// that can miss close notifications.
    pub fn sweep_idle_sessions(&self, max_idle: Duration) -> usize {
        self.sweep_idle_sessions_at(max_idle, Utc::now())
    }

    pub fn sweep_idle_sessions_at(&self, max_idle: Duration, now: DateTime<Utc>) -> usize {
        let _span = maintenance_span!("sweep_idle_sessions").entered();
        let removed = autopush_session::sweep_idle_sessions(&self.sessions, max_idle, now);
        if removed > 0 {
            events::sessions_swept(removed, self.sessions.session_count());
        }
        removed
    }

    /// Evict roots first seen more than `age` ago that have nothing promoted.
    ///
    /// Each candidate root's children are re-evaluated at `now` first, so a
    /// child whose warmup has since elapsed keeps its root and a child that
    /// has since fallen below the demotion ratio does not. Returns the number
    /// evicted.
    ///
    /// A concurrent recording that already holds an evicted root keeps
    /// writing to the detached entry. Those increments are lost.
    pub fn evict_roots_older_than(&self, age: Duration) -> usize {
        self.evict_roots_older_than_at(age, Utc::now())
    }

    pub fn evict_roots_older_than_at(&self, age: Duration, now: DateTime<Utc>) -> usize {
        let _span = maintenance_span!("evict_roots").entered();
        let mut evicted = 0;
        for path in self.store.entries_older_than(age, now) {
            let evaluations = self.engine.evaluate_root(&self.store, &path, now);
            for (_, evaluation) in &evaluations {
                self.track(evaluation);
            }
            let promoted = evaluations
                .iter()
                .any(|(_, e)| PromotionEngine::qualifies(e.current));
            if !promoted && self.store.evict_root(&path) {
                evicted += 1;
            }
        }
        if evicted > 0 {
            events::roots_evicted(evicted, self.store.root_count());
        }
        evicted
    }
}
