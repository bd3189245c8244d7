//! Learned counters. Counts only ever increase.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;

use autopush_core::models::ChildState;

/// One distinct primary path.
#[derive(Debug)]
pub struct RootEntry {
    root_count: AtomicU64,
    first_seen_at: DateTime<Utc>,
    pub(crate) children: DashMap<String, Arc<ChildEntry>>,
}

impl RootEntry {
    /// A root observed for the first time at `now`.
    pub(crate) fn first_observation(now: DateTime<Utc>) -> Self {
        Self {
            root_count: AtomicU64::new(1),
            first_seen_at: now,
            children: DashMap::new(),
        }
    }

    pub(crate) fn increment(&self) -> u64 {
        self.root_count.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Times this path was observed as a root.
    pub fn root_count(&self) -> u64 {
        self.root_count.load(Ordering::Acquire)
    }

    /// Creation time. Anchors the warmup window.
    pub fn first_seen_at(&self) -> DateTime<Utc> {
        self.first_seen_at
    }

    /// Time since first observation, never negative.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        (now - self.first_seen_at).max(chrono::Duration::zero())
    }

    /// Number of distinct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Look up one child.
    pub fn child(&self, path: &str) -> Option<Arc<ChildEntry>> {
        self.children.get(path).map(|c| Arc::clone(c.value()))
    }
}

/// One (root, child) pair.
#[derive(Debug)]
pub struct ChildEntry {
    count: AtomicU64,
    state: AtomicU8,
}

impl ChildEntry {
    /// A child observed for the first time, in `Tracking`.
    pub(crate) fn first_observation() -> Self {
        Self {
            count: AtomicU64::new(1),
            state: AtomicU8::new(ChildState::Tracking.as_u8()),
        }
    }

    pub(crate) fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Times this child followed its root.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }

    /// Last state written by the promotion engine.
    pub fn state(&self) -> ChildState {
        ChildState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Move from `from` to `to`. Fails if another evaluation got there first.
    /// Only the promotion engine calls this.
    pub(crate) fn transition(&self, from: ChildState, to: ChildState) -> bool {
        self.state
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
