use autopush_core::errors::*;

#[test]
fn invalid_ratio_carries_field_and_value() {
    let err = ConfigError::InvalidRatio {
        field: "promotion_ratio",
        value: 1.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("promotion_ratio"));
    assert!(msg.contains("1.5"));
}

#[test]
fn ratio_ordering_carries_both_thresholds() {
    let err = ConfigError::RatioOrdering {
        demotion: 0.6,
        promotion: 0.4,
    };
    let msg = err.to_string();
    assert!(msg.contains("0.600"));
    assert!(msg.contains("0.400"));
}

// --- From impls ---

#[test]
fn config_error_converts_to_autopush_error() {
    let err: AutoPushError = ConfigError::MinimumRequests { value: 0 }.into();
    assert!(matches!(err, AutoPushError::Config(_)));
    assert!(err.to_string().contains("minimum_requests"));
}

#[test]
fn serialization_error_converts_to_autopush_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: AutoPushError = json_err.into();
    assert!(matches!(err, AutoPushError::SerializationError(_)));
}

#[test]
fn toml_error_converts_to_autopush_error() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: AutoPushError = toml_err.into();
    assert!(matches!(err, AutoPushError::ConfigParse(_)));
}
