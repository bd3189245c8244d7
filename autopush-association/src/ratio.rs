use autopush_core::constants::MAX_RATIO;

/// Correlation strength of a child relative to its root, clamped to
/// [0.0, 1.0]. A root that was never counted yields 0.0.
pub fn ratio(child_count: u64, root_count: u64) -> f64 {
    if root_count == 0 {
        return 0.0;
    }
    (child_count as f64 / root_count as f64).min(MAX_RATIO)
}
