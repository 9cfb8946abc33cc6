//! Remote resource configuration.

use serde::{Deserialize, Serialize};

/// The resource the overlay loads into its embedded webview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Absolute `http://` or `https://` URL.
    pub url: String,
    /// Fetch timeout in seconds (valid range: 1-120).
    pub timeout_secs: u32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            url: "https://birmgrand.top/get".into(),
            timeout_secs: 12,
        }
    }
}
