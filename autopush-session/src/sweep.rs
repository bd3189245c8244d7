//! Idle session removal.
//!
//! Sessions are normally removed by `on_session_closed`. A serving layer that
//! can lose close notifications calls this periodically instead, so tracker
//! memory stays proportional to live connections.

use chrono::{DateTime, Duration, Utc};

use crate::tracker::SessionRootTracker;

/// Default idle threshold: 10 minutes.
pub const DEFAULT_MAX_IDLE: Duration = Duration::minutes(10);

/// Remove sessions idle for longer than `max_idle`.
///
/// Returns the number of sessions removed.
pub fn sweep_idle_sessions(
    tracker: &SessionRootTracker,
    max_idle: Duration,
    now: DateTime<Utc>,
) -> usize {
    tracker.retain_active(max_idle, now)
}
