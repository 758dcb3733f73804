//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ChatbarConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn out_of_range_width_is_not_an_error() {
    let mut config = ChatbarConfig::default();
    config.sidebar.width = -500;
    assert!(validate(&config).is_ok());
    config.sidebar.width = 10_000;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_narrow_not_below_minimum() {
    let mut config = ChatbarConfig::default();
    config.sidebar.bounds.narrow = 230;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.bounds.narrow = 230 must be less than sidebar.bounds.minimum"));
}

#[test]
fn catches_non_positive_narrow() {
    let mut config = ChatbarConfig::default();
    config.sidebar.bounds.narrow = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.bounds.narrow = 0 must be greater than 0"));
}

#[test]
fn catches_default_above_maximum() {
    let mut config = ChatbarConfig::default();
    config.sidebar.bounds.default_width = 600;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.bounds.default = 600"));
}

#[test]
fn catches_minimum_equal_to_default() {
    let mut config = ChatbarConfig::default();
    config.sidebar.bounds.minimum = 300;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.bounds.minimum = 300"));
}

#[test]
fn catches_zero_throttle() {
    let mut config = ChatbarConfig::default();
    config.sidebar.gesture.throttle_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.gesture.throttle_ms must be greater than 0"));
}

#[test]
fn catches_throttle_not_below_click_threshold() {
    let mut config = ChatbarConfig::default();
    config.sidebar.gesture.throttle_ms = 400;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.gesture.throttle_ms = 400"));
}

#[test]
fn catches_zero_mobile_max_width() {
    let mut config = ChatbarConfig::default();
    config.device.mobile_max_width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("device.mobile_max_width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ChatbarConfig::default();
    config.sidebar.bounds.maximum = 200;
    config.device.mobile_max_width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.bounds.maximum"));
    assert!(err.contains("device.mobile_max_width"));
    assert!(err.contains("; "));
}
