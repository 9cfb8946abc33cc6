//! Resource URL and timeout validation.

use crate::endpoint::{EndpointError, ResourceEndpoint};
use crate::schema::LoadveilConfig;

use super::helpers::validate_range;

pub(super) fn validate_resource(errors: &mut Vec<String>, config: &LoadveilConfig) {
    validate_url(errors, "resource.url", &config.resource.url);
    validate_range(
        errors,
        "resource.timeout_secs",
        config.resource.timeout_secs,
        1,
        120,
    );
}

/// The URL must resolve to an http(s) endpoint the probe can reach.
fn validate_url(errors: &mut Vec<String>, name: &str, url: &str) {
    match ResourceEndpoint::parse(url) {
        Ok(_) => {}
        Err(e @ EndpointError::Empty) => errors.push(format!("{name} {e}")),
        Err(e) => errors.push(format!("{name} = {url:?} {e}")),
    }
}
