//! # autopush-session
//!
//! Per-connection root tracking. Each live session remembers its most recent
//! primary request so that subsequent asset requests can be attributed to it.
//! Concurrent access via `DashMap`.
//!
//! ## Modules
//!
//! - `root`: `SessionRoot`, the per-connection record
//! - `tracker`: `SessionRootTracker` with `DashMap` for concurrent access
//! - `sweep`: idle session removal for serving layers that miss close events

pub mod root;
pub mod sweep;
pub mod tracker;

pub use root::SessionRoot;
pub use sweep::{sweep_idle_sessions, DEFAULT_MAX_IDLE};
pub use tracker::SessionRootTracker;
