//! Structured log events for cache lifecycle operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log construction of an asset cache.
pub fn cache_created(warmup_ms: u64, promotion_ratio: f64, demotion_ratio: f64, minimum: u64) {
    tracing::info!(
        event = "cache_created",
        warmup_ms = warmup_ms,
        promotion_ratio = promotion_ratio,
        demotion_ratio = demotion_ratio,
        minimum_requests = minimum,
        "asset cache created"
    );
}

/// Log a request that arrived as an asset with no root to attribute it to.
pub fn unattributed_asset(session_id: &str, path: &str) {
    tracing::debug!(
        event = "unattributed_asset",
        session_id = %session_id,
        path = %path,
        "asset recorded as its own root"
    );
}

/// Log a session close notification.
pub fn session_closed(session_id: &str, had_root: bool) {
    tracing::debug!(
        event = "session_closed",
        session_id = %session_id,
        had_root = had_root,
        "session closed"
    );
}

/// Log an idle-session sweep.
pub fn sessions_swept(removed: usize, remaining: usize) {
    tracing::info!(
        event = "sessions_swept",
        removed = removed,
        remaining = remaining,
        "idle sessions swept"
    );
}

/// Log eviction of stale roots.
pub fn roots_evicted(evicted: usize, remaining: usize) {
    tracing::info!(
        event = "roots_evicted",
        evicted = evicted,
        remaining = remaining,
        "stale roots evicted"
    );
}
