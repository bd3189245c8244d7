//! # autopush-cache
//!
//! The asset cache: learns from live traffic which assets a client requests
//! right after a page, and returns the confident ones as push candidates.
//!
//! ```
//! use autopush_cache::AssetCache;
//! use autopush_core::config::CacheConfig;
//!
//! let cache = AssetCache::new(CacheConfig::new(0, 0.8, 0.2, 1)).unwrap();
//! for _ in 0..2 {
//!     cache.record_request_path("conn-1", "/index.html", false);
//!     cache.record_request_path("conn-1", "/style.css", true);
//! }
//! assert_eq!(cache.get_assets_for_path("/index.html"), vec!["/style.css"]);
//! ```
//!
//! Both entry points are safe to call concurrently from any number of
//! request handlers.

pub mod cache;
pub mod maintenance;

pub use autopush_association::PushCandidate;
pub use autopush_core::{AutoPushConfig, AutoPushError, AutoPushResult, CacheConfig};
pub use cache::AssetCache;
