//! Sidebar bounds and gesture timing validation.

use crate::schema::ChatbarConfig;

use super::helpers::{validate_nonzero, validate_strictly_below};

/// Validate `narrow < minimum < default < maximum` with a positive `narrow`.
pub(crate) fn validate_bounds(errors: &mut Vec<String>, config: &ChatbarConfig) {
    let b = &config.sidebar.bounds;
    if b.narrow <= 0 {
        errors.push(format!(
            "sidebar.bounds.narrow = {} must be greater than 0",
            b.narrow
        ));
    }
    validate_strictly_below(
        errors,
        "sidebar.bounds.narrow",
        b.narrow,
        "sidebar.bounds.minimum",
        b.minimum,
    );
    validate_strictly_below(
        errors,
        "sidebar.bounds.minimum",
        b.minimum,
        "sidebar.bounds.default",
        b.default_width,
    );
    validate_strictly_below(
        errors,
        "sidebar.bounds.default",
        b.default_width,
        "sidebar.bounds.maximum",
        b.maximum,
    );
}

pub(crate) fn validate_gesture(errors: &mut Vec<String>, config: &ChatbarConfig) {
    let g = &config.sidebar.gesture;
    validate_nonzero(errors, "sidebar.gesture.throttle_ms", g.throttle_ms);
    validate_nonzero(
        errors,
        "sidebar.gesture.click_threshold_ms",
        g.click_threshold_ms,
    );
    if g.throttle_ms >= g.click_threshold_ms {
        errors.push(format!(
            "sidebar.gesture.throttle_ms = {} must be less than \
             sidebar.gesture.click_threshold_ms = {}",
            g.throttle_ms, g.click_threshold_ms
        ));
    }
}
