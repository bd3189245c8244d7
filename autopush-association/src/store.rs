//! AssociationStore: concurrent root → child counters via DashMap.
//!
//! Roots and children are created through the map's entry API, so two
//! concurrent first observations of the same path produce one entry with
//! both increments applied. Entries are handed out as `Arc`s: an evicted
//! entry stays valid for anyone still holding it.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use autopush_core::models::{ChildSnapshot, RootSnapshot};

use crate::entry::{ChildEntry, RootEntry};
use crate::ratio::ratio;

/// Owner of every learned association for the lifetime of one asset cache.
#[derive(Debug, Default)]
pub struct AssociationStore {
    roots: DashMap<String, Arc<RootEntry>>,
}

impl AssociationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one observation of `path` as a root.
    pub fn record_root(&self, path: &str) -> Arc<RootEntry> {
        self.record_root_at(path, Utc::now())
    }

    /// [`Self::record_root`] with an explicit clock. `now` only matters when
    /// the root is new: it becomes `first_seen_at`.
    pub fn record_root_at(&self, path: &str, now: DateTime<Utc>) -> Arc<RootEntry> {
        if let Some(existing) = self.roots.get(path) {
            existing.increment();
            return Arc::clone(existing.value());
        }

        match self.roots.entry(path.to_string()) {
            Entry::Occupied(occupied) => {
                occupied.get().increment();
                Arc::clone(occupied.get())
            }
            Entry::Vacant(vacant) => {
                let root = Arc::new(RootEntry::first_observation(now));
                vacant.insert(Arc::clone(&root));
                root
            }
        }
    }

    /// Count one observation of `child` following `root`.
    ///
    /// Returns `None` without side effects when `root` was never recorded.
    pub fn record_child(
        &self,
        root: &str,
        child: &str,
    ) -> Option<(Arc<RootEntry>, Arc<ChildEntry>)> {
        let root_entry = self.root(root)?;

        let existing = root_entry.children.get(child).map(|c| {
            c.increment();
            Arc::clone(c.value())
        });
        if let Some(child_entry) = existing {
            return Some((root_entry, child_entry));
        }

        let child_entry = match root_entry.children.entry(child.to_string()) {
            Entry::Occupied(occupied) => {
                occupied.get().increment();
                Arc::clone(occupied.get())
            }
            Entry::Vacant(vacant) => {
                let created = Arc::new(ChildEntry::first_observation());
                vacant.insert(Arc::clone(&created));
                created
            }
        };
        Some((root_entry, child_entry))
    }

    /// Look up a root.
    pub fn root(&self, path: &str) -> Option<Arc<RootEntry>> {
        self.roots.get(path).map(|r| Arc::clone(r.value()))
    }

    pub fn contains_root(&self, path: &str) -> bool {
        self.roots.contains_key(path)
    }

    /// All children of `root`, in no particular order. Empty when unknown.
    pub fn list_children(&self, root: &str) -> Vec<(String, Arc<ChildEntry>)> {
        match self.root(root) {
            Some(entry) => entry
                .children
                .iter()
                .map(|c| (c.key().clone(), Arc::clone(c.value())))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of distinct roots.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Number of (root, child) pairs across all roots.
    pub fn child_count(&self) -> usize {
        self.roots.iter().map(|r| r.child_count()).sum()
    }

    /// Roots first seen more than `age` before `now`.
    pub fn entries_older_than(&self, age: chrono::Duration, now: DateTime<Utc>) -> Vec<String> {
        self.roots
            .iter()
            .filter(|r| r.age(now) > age)
            .map(|r| r.key().clone())
            .collect()
    }

    /// Forget a root and all of its children.
    pub fn evict_root(&self, path: &str) -> bool {
        self.roots.remove(path).is_some()
    }

    /// Point-in-time view of one root. States are as last evaluated.
    pub fn snapshot(&self, path: &str) -> Option<RootSnapshot> {
        self.root(path).map(|entry| snapshot_of(path, &entry))
    }

    /// Point-in-time view of every root, sorted by path.
    pub fn snapshot_all(&self) -> Vec<RootSnapshot> {
        let roots: Vec<(String, Arc<RootEntry>)> = self
            .roots
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect();
        let mut snapshots: Vec<RootSnapshot> = roots
            .iter()
            .map(|(path, entry)| snapshot_of(path, entry))
            .collect();
        snapshots.sort_by(|a, b| a.path.cmp(&b.path));
        snapshots
    }
}

fn snapshot_of(path: &str, entry: &RootEntry) -> RootSnapshot {
    let root_count = entry.root_count();
    let mut children: Vec<ChildSnapshot> = entry
        .children
        .iter()
        .map(|c| {
            let count = c.count();
            ChildSnapshot {
                path: c.key().clone(),
                count,
                state: c.state(),
                ratio: ratio(count, root_count),
            }
        })
        .collect();
    children.sort_by(|a, b| a.path.cmp(&b.path));
    RootSnapshot {
        path: path.to_string(),
        root_count,
        first_seen_at: entry.first_seen_at(),
        children,
    }
}
