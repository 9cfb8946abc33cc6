//! Loadveil configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use loadveil_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod endpoint;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use endpoint::{EndpointError, ResourceEndpoint};
pub use schema::{LoadveilConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use loadveil_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<LoadveilConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<LoadveilConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LoadveilConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
