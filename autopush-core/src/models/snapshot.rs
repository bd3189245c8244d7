use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ChildState;

/// Point-in-time view of one learned child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildSnapshot {
    pub path: String,
    pub count: u64,
    pub state: ChildState,
    /// `count / root_count`, clamped to [0.0, 1.0].
    pub ratio: f64,
}

/// Point-in-time view of one root and its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootSnapshot {
    pub path: String,
    pub root_count: u64,
    pub first_seen_at: DateTime<Utc>,
    pub children: Vec<ChildSnapshot>,
}

impl RootSnapshot {
    /// Find a child by path.
    pub fn child(&self, path: &str) -> Option<&ChildSnapshot> {
        self.children.iter().find(|c| c.path == path)
    }

    /// Children currently in `Promoted` state.
    pub fn promoted(&self) -> impl Iterator<Item = &ChildSnapshot> {
        self.children.iter().filter(|c| c.state.is_promoted())
    }
}
