//! Test fixture loader for autopush traffic scenarios.
//!
//! A scenario is a JSON file under `test-fixtures/scenarios/`: a cache
//! config plus an ordered list of requests, session closes, and
//! expectations. Timestamps are milliseconds relative to the scenario start.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("scenarios").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/scenarios from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One traffic scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Deserializes into `autopush_core::config::CacheConfig`.
    pub config: serde_json::Value,
    pub steps: Vec<Step>,
}

/// One scenario step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Record `repeat` identical requests.
    Request {
        session: String,
        path: String,
        #[serde(default)]
        asset: bool,
        #[serde(default)]
        at_ms: i64,
        #[serde(default = "one")]
        repeat: u32,
    },
    /// Close a session.
    Close { session: String },
    /// Query push candidates and compare, in order.
    Expect {
        path: String,
        #[serde(default)]
        at_ms: i64,
        assets: Vec<String>,
    },
    /// Check a child's lifecycle state as last evaluated.
    ExpectState {
        root: String,
        child: String,
        state: String,
    },
    /// Check a root's observation count.
    ExpectRootCount { path: String, count: u64 },
}

fn one() -> u32 {
    1
}

/// Load one scenario by file stem, e.g. `"scenario_a_basic_push"`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Load every scenario, sorted by file name.
pub fn all_scenarios() -> Vec<Scenario> {
    list_fixtures("scenarios")
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
        })
        .collect()
}
