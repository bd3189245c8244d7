//! AssetCache: session tracking, association learning, and push ranking
//! behind two entry points.

use chrono::{DateTime, Utc};

use autopush_association::{rank, AssociationStore, Evaluation, PromotionEngine, PushCandidate};
use autopush_core::config::{AutoPushConfig, CacheConfig};
use autopush_core::errors::AutoPushResult;
use autopush_core::models::{RootAttribution, RootSnapshot};
use autopush_core::traits::{IPushPredictor, IRequestObserver};
use autopush_observability::tracing_setup::events;
use autopush_observability::{query_span, record_span, MetricsSnapshot, PushMetrics};
use autopush_session::SessionRootTracker;

/// One learning scope. Everything it learns lives as long as the instance.
pub struct AssetCache {
    config: CacheConfig,
    pub(crate) engine: PromotionEngine,
    pub(crate) store: AssociationStore,
    pub(crate) sessions: SessionRootTracker,
    pub(crate) metrics: PushMetrics,
}

impl AssetCache {
    /// Create a cache. Fails on an invalid configuration.
    pub fn new(config: CacheConfig) -> AutoPushResult<Self> {
        let engine = PromotionEngine::from_config(&config)?;
        events::cache_created(
            config.warmup_duration_ms,
            config.promotion_ratio,
            config.demotion_ratio,
            config.minimum_requests,
        );
        Ok(Self {
            config,
            engine,
            store: AssociationStore::new(),
            sessions: SessionRootTracker::new(),
            metrics: PushMetrics::new(),
        })
    }

    /// Create from the `[cache]` section of a full config.
    pub fn from_config(config: &AutoPushConfig) -> AutoPushResult<Self> {
        Self::new(config.cache.clone())
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Record one observed request.
    pub fn record_request_path(&self, session_id: &str, path: &str, is_asset: bool) {
        self.record_request_path_at(session_id, path, is_asset, Utc::now());
    }

    /// [`Self::record_request_path`] with an explicit clock. Returns how the
    /// request was attributed.
    ///
    /// - primary request: counted as a root.
    /// - asset after a primary on the same session: counted as a child of
    ///   that root, then re-evaluated.
    /// - asset with no root on its session: counted as a root of itself.
    ///
    /// An asset whose path equals its session's current root is not counted
    /// as a child of that root. A page never pushes itself.
    pub fn record_request_path_at(
        &self,
        session_id: &str,
        path: &str,
        is_asset: bool,
        now: DateTime<Utc>,
    ) -> RootAttribution {
        let _span = record_span!(session_id, path, is_asset).entered();

        let attribution = self.sessions.observe_at(session_id, path, is_asset, now);
        match &attribution {
            RootAttribution::Primary { path } => {
                self.store.record_root_at(path, now);
                self.metrics.record_primary();
            }
            RootAttribution::Attributed { root } => {
                self.metrics.record_attributed_asset();
                // No self-association.
                if root != path {
                    if let Some((root_entry, child)) = self.store.record_child(root, path) {
                        let evaluation = self.engine.evaluate(root, &root_entry, path, &child, now);
                        self.track(&evaluation);
                    }
                }
            }
            RootAttribution::Unattributed => {
                self.store.record_root_at(path, now);
                self.metrics.record_unattributed_asset();
                events::unattributed_asset(session_id, path);
            }
        }
        attribution
    }

    /// Forget a closed connection's routing state. Learned data is kept.
    pub fn on_session_closed(&self, session_id: &str) {
        let closed = self.sessions.on_session_closed(session_id);
        if let Some(session) = closed {
            self.metrics.record_session_closed();
            events::session_closed(session_id, session.current_root.is_some());
        }
    }

    /// Assets to push after serving `path`, most confident first.
    pub fn get_assets_for_path(&self, path: &str) -> Vec<String> {
        self.get_assets_for_path_at(path, Utc::now())
    }

    /// [`Self::get_assets_for_path`] with an explicit clock.
    pub fn get_assets_for_path_at(&self, path: &str, now: DateTime<Utc>) -> Vec<String> {
        self.push_candidates_at(path, now)
            .into_iter()
            .map(|c| c.path)
            .collect()
    }

    /// At most `limit` assets, for callers pushing under a budget.
    pub fn get_assets_for_path_limited(&self, path: &str, limit: usize) -> Vec<String> {
        let mut assets = self.get_assets_for_path(path);
        assets.truncate(limit);
        assets
    }

    /// Ranked candidates with their ratio and count.
    ///
    /// Every child's state is recomputed from live counters before filtering,
    /// so a child whose ratio has fallen is demoted here rather than pushed.
    pub fn push_candidates_at(&self, path: &str, now: DateTime<Utc>) -> Vec<PushCandidate> {
        let _span = query_span!(path).entered();

        let evaluations = self.engine.evaluate_root(&self.store, path, now);
        for (_, evaluation) in &evaluations {
            self.track(evaluation);
        }
        let candidates = rank(evaluations);
        self.metrics.record_query(candidates.len());
        candidates
    }

    /// Learned state of one root, as last evaluated.
    pub fn snapshot(&self, path: &str) -> Option<RootSnapshot> {
        self.store.snapshot(path)
    }

    /// Learned state of every root.
    pub fn snapshot_all(&self) -> Vec<RootSnapshot> {
        self.store.snapshot_all()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.session_count()
    }

    /// Number of distinct roots learned.
    pub fn root_count(&self) -> usize {
        self.store.root_count()
    }

    pub(crate) fn track(&self, evaluation: &Evaluation) {
        if evaluation.promoted() {
            self.metrics.record_promotion();
        } else if evaluation.demoted() {
            self.metrics.record_demotion();
        }
    }
}

impl IRequestObserver for AssetCache {
    fn record_request_path(&self, session_id: &str, path: &str, is_asset: bool) {
        AssetCache::record_request_path(self, session_id, path, is_asset);
    }

    fn on_session_closed(&self, session_id: &str) {
        AssetCache::on_session_closed(self, session_id);
    }
}

impl IPushPredictor for AssetCache {
    fn get_assets_for_path(&self, path: &str) -> Vec<String> {
        AssetCache::get_assets_for_path(self, path)
    }
}
