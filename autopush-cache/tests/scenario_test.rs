//! Drives every JSON traffic scenario in test-fixtures through the cache.

use autopush_cache::AssetCache;
use autopush_core::config::CacheConfig;
use autopush_core::models::ChildState;
use chrono::{DateTime, Duration, Utc};
use test_fixtures::{all_scenarios, load_scenario, Scenario, Step};

fn parse_state(name: &str) -> ChildState {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .unwrap_or_else(|e| panic!("unknown state {name}: {e}"))
}

fn run(scenario: &Scenario) {
    let config: CacheConfig = serde_json::from_value(scenario.config.clone())
        .unwrap_or_else(|e| panic!("{}: bad config: {e}", scenario.name));
    let cache = AssetCache::new(config).expect("scenario config should be valid");
    let start: DateTime<Utc> = Utc::now();

    for (i, step) in scenario.steps.iter().enumerate() {
        match step {
            Step::Request {
                session,
                path,
                asset,
                at_ms,
                repeat,
            } => {
                let now = start + Duration::milliseconds(*at_ms);
                for _ in 0..*repeat {
                    cache.record_request_path_at(session, path, *asset, now);
                }
            }
            Step::Close { session } => cache.on_session_closed(session),
            Step::Expect {
                path,
                at_ms,
                assets,
            } => {
                let now = start + Duration::milliseconds(*at_ms);
                let actual = cache.get_assets_for_path_at(path, now);
                assert_eq!(
                    &actual, assets,
                    "{} step {}: assets for {}",
                    scenario.name, i, path
                );
            }
            Step::ExpectState { root, child, state } => {
                let snapshot = cache
                    .snapshot(root)
                    .unwrap_or_else(|| panic!("{} step {}: no root {}", scenario.name, i, root));
                let actual = snapshot
                    .child(child)
                    .unwrap_or_else(|| panic!("{} step {}: no child {}", scenario.name, i, child))
                    .state;
                assert_eq!(
                    actual,
                    parse_state(state),
                    "{} step {}: state of {} under {}",
                    scenario.name,
                    i,
                    child,
                    root
                );
            }
            Step::ExpectRootCount { path, count } => {
                let actual = cache.snapshot(path).map(|s| s.root_count).unwrap_or(0);
                assert_eq!(
                    actual, *count,
                    "{} step {}: root count of {}",
                    scenario.name, i, path
                );
            }
        }
    }
}

#[test]
fn scenario_a_basic_push() {
    run(&load_scenario("scenario_a_basic_push"));
}

#[test]
fn scenario_b_demotion_boundary() {
    run(&load_scenario("scenario_b_demotion_boundary"));
}

#[test]
fn scenario_c_demote_and_rearm() {
    run(&load_scenario("scenario_c_demote_and_rearm"));
}

#[test]
fn scenario_d_orphan_asset() {
    run(&load_scenario("scenario_d_orphan_asset"));
}

#[test]
fn all_scenarios_pass() {
    let scenarios = all_scenarios();
    assert!(scenarios.len() >= 8, "expected the full scenario set");
    for scenario in &scenarios {
        run(scenario);
    }
}
