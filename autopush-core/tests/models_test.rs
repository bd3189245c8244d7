use autopush_core::models::*;
use chrono::Utc;
use proptest::prelude::*;

#[test]
fn child_state_defaults_to_tracking() {
    assert_eq!(ChildState::default(), ChildState::Tracking);
}

#[test]
fn child_state_serializes_lowercase() {
    let json = serde_json::to_string(&ChildState::Promoted).unwrap();
    assert_eq!(json, "\"promoted\"");
    let state: ChildState = serde_json::from_str("\"demoted\"").unwrap();
    assert_eq!(state, ChildState::Demoted);
}

#[test]
fn unknown_state_encoding_falls_back_to_tracking() {
    assert_eq!(ChildState::from_u8(42), ChildState::Tracking);
}

proptest! {
    #[test]
    fn state_encoding_is_stable(idx in 0usize..3) {
        let state = [ChildState::Tracking, ChildState::Promoted, ChildState::Demoted][idx];
        prop_assert_eq!(ChildState::from_u8(state.as_u8()), state);
    }
}

#[test]
fn attribution_root_accessor() {
    let primary = RootAttribution::Primary {
        path: "/index.html".into(),
    };
    let attributed = RootAttribution::Attributed {
        root: "/index.html".into(),
    };
    assert_eq!(primary.root(), Some("/index.html"));
    assert_eq!(attributed.root(), Some("/index.html"));
    assert_eq!(RootAttribution::Unattributed.root(), None);
}

#[test]
fn attribution_serializes_with_kind_tag() {
    let json = serde_json::to_value(RootAttribution::Unattributed).unwrap();
    assert_eq!(json["kind"], "unattributed");
}

#[test]
fn observation_constructors_set_asset_flag() {
    assert!(!RequestObservation::primary("s1", "/").is_asset);
    assert!(RequestObservation::asset("s1", "/app.js").is_asset);
}

#[test]
fn root_snapshot_lookups() {
    let snapshot = RootSnapshot {
        path: "/index.html".into(),
        root_count: 4,
        first_seen_at: Utc::now(),
        children: vec![
            ChildSnapshot {
                path: "/style.css".into(),
                count: 4,
                state: ChildState::Promoted,
                ratio: 1.0,
            },
            ChildSnapshot {
                path: "/ad.js".into(),
                count: 1,
                state: ChildState::Tracking,
                ratio: 0.25,
            },
        ],
    };
    assert_eq!(snapshot.child("/ad.js").map(|c| c.count), Some(1));
    assert!(snapshot.child("/missing.png").is_none());
    let promoted: Vec<_> = snapshot.promoted().map(|c| c.path.as_str()).collect();
    assert_eq!(promoted, vec!["/style.css"]);
}
