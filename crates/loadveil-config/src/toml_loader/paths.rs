//! Where the config file lives, and writing the first-run template.

use std::path::{Path, PathBuf};

use loadveil_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "loadveil";
const CONFIG_FILE: &str = "config.toml";

/// `<base>/loadveil/config.toml`.
pub(crate) fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// The config file under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_err("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| write_err("write default config to", path, e))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
