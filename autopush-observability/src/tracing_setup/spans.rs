//! Span definitions per operation: record, query, maintenance.

/// Create a span around recording one request.
#[macro_export]
macro_rules! record_span {
    ($session_id:expr, $path:expr, $is_asset:expr) => {
        tracing::debug_span!(
            "autopush.record",
            session_id = %$session_id,
            path = %$path,
            is_asset = $is_asset
        )
    };
}

/// Create a span around a push-candidate query.
#[macro_export]
macro_rules! query_span {
    ($path:expr) => {
        tracing::debug_span!("autopush.query", path = %$path)
    };
}

/// Create a span around caller-driven maintenance (sweeps, eviction).
#[macro_export]
macro_rules! maintenance_span {
    ($operation:expr) => {
        tracing::info_span!("autopush.maintenance", operation = %$operation)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECORD: &str = "autopush.record";
    pub const QUERY: &str = "autopush.query";
    pub const MAINTENANCE: &str = "autopush.maintenance";
}
