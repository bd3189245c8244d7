//! SessionRootTracker: concurrent session → root mapping via DashMap.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use autopush_core::models::RootAttribution;

use crate::root::SessionRoot;

/// Thread-safe tracker of each live session's current root.
///
/// Sessions on different connections land on different shards, so unrelated
/// connections do not serialize on one lock.
pub struct SessionRootTracker {
    sessions: DashMap<String, SessionRoot>,
}

impl SessionRootTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Classify a request and update the session's root.
    pub fn observe(&self, session_id: &str, path: &str, is_asset: bool) -> RootAttribution {
        self.observe_at(session_id, path, is_asset, Utc::now())
    }

    /// [`Self::observe`] with an explicit clock.
    ///
    /// A primary request becomes the session's root and is its own root.
    /// An asset request is attributed to the current root, or reported as
    /// unattributed when the session has none yet.
    pub fn observe_at(
        &self,
        session_id: &str,
        path: &str,
        is_asset: bool,
        now: DateTime<Utc>,
    ) -> RootAttribution {
        if !is_asset {
            match self.sessions.get_mut(session_id) {
                Some(mut session) => session.set_root(path, now),
                None => {
                    self.sessions
                        .entry(session_id.to_string())
                        .and_modify(|s| s.set_root(path, now))
                        .or_insert_with(|| {
                            SessionRoot::with_root(session_id.to_string(), path, now)
                        });
                }
            }
            return RootAttribution::Primary {
                path: path.to_string(),
            };
        }

        let current = match self.sessions.get_mut(session_id) {
            Some(mut session) => {
                session.touch(now);
                session.current_root.clone()
            }
            None => {
                let mut session = self
                    .sessions
                    .entry(session_id.to_string())
                    .or_insert_with(|| SessionRoot::new(session_id.to_string(), now));
                session.touch(now);
                session.current_root.clone()
            }
        };

        match current {
            Some(root) => RootAttribution::Attributed { root },
            None => RootAttribution::Unattributed,
        }
    }

    /// Remove a closed session. Returns its final record, if it was known.
    pub fn on_session_closed(&self, session_id: &str) -> Option<SessionRoot> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Current root of a session.
    pub fn current_root(&self, session_id: &str) -> Option<String> {
        self.sessions
            .get(session_id)
            .and_then(|s| s.current_root.clone())
    }

    /// Get a session record by ID (cloned snapshot).
    pub fn get_session(&self, session_id: &str) -> Option<SessionRoot> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Get all session IDs.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    /// Drop every session whose last activity is older than `max_idle`.
    /// Returns the number removed.
    pub(crate) fn retain_active(&self, max_idle: chrono::Duration, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.sessions.retain(|_, session| {
            let keep = session.idle_duration(now) <= max_idle;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }
}

impl Default for SessionRootTracker {
    fn default() -> Self {
        Self::new()
    }
}
