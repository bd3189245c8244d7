//! SessionRoot: the current root of one live connection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Routing metadata for one connection. Never outlives the connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRoot {
    /// Connection identity.
    pub session_id: String,
    /// Most recent primary request path, if any.
    pub current_root: Option<String>,
    /// When `current_root` was last set.
    pub root_updated_at: Option<DateTime<Utc>>,
    /// When this session was first seen.
    pub created_at: DateTime<Utc>,
    /// Last request of any kind on this session.
    pub last_activity: DateTime<Utc>,
}

impl SessionRoot {
    /// A session whose first request was an asset: no root yet.
    pub fn new(session_id: String, now: DateTime<Utc>) -> Self {
        Self {
            session_id,
            current_root: None,
            root_updated_at: None,
            created_at: now,
            last_activity: now,
        }
    }

    /// A session whose first request was the primary `path`.
    pub fn with_root(session_id: String, path: &str, now: DateTime<Utc>) -> Self {
        let mut root = Self::new(session_id, now);
        root.set_root(path, now);
        root
    }

    /// Replace the current root.
    pub fn set_root(&mut self, path: &str, now: DateTime<Utc>) {
        match self.current_root.as_mut() {
            Some(existing) if existing == path => {}
            Some(existing) => {
                existing.clear();
                existing.push_str(path);
            }
            None => self.current_root = Some(path.to_string()),
        }
        self.root_updated_at = Some(now);
        self.last_activity = now;
    }

    /// Note a request that does not change the root.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
    }

    /// Duration since last activity.
    pub fn idle_duration(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.last_activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_root_replaces_previous_path() {
        let now = Utc::now();
        let mut root = SessionRoot::with_root("s".into(), "/a.html", now);
        root.set_root("/b.html", now);
        assert_eq!(root.current_root.as_deref(), Some("/b.html"));
    }

    #[test]
    fn touch_keeps_root() {
        let now = Utc::now();
        let mut root = SessionRoot::with_root("s".into(), "/a.html", now);
        root.touch(now + chrono::Duration::seconds(5));
        assert_eq!(root.current_root.as_deref(), Some("/a.html"));
        assert_eq!(root.root_updated_at, Some(now));
        assert_eq!(root.idle_duration(now + chrono::Duration::seconds(5)), chrono::Duration::zero());
    }
}
