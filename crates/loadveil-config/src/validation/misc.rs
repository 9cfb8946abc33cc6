//! Validation for connectivity probing and the host window.

use crate::schema::LoadveilConfig;

use super::helpers::validate_range;

pub(super) fn validate_connectivity(errors: &mut Vec<String>, config: &LoadveilConfig) {
    validate_range(
        errors,
        "connectivity.probe_interval_secs",
        config.connectivity.probe_interval_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "connectivity.probe_timeout_ms",
        config.connectivity.probe_timeout_ms,
        100,
        30_000,
    );
}

pub(super) fn validate_window(errors: &mut Vec<String>, config: &LoadveilConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}
