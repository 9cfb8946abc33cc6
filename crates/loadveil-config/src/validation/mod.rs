//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod resource;


use crate::schema::LoadveilConfig;
use loadveil_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LoadveilConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    resource::validate_resource(&mut errors, config);
    misc::validate_connectivity(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
