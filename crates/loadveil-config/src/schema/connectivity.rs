//! Connectivity probe configuration.

use serde::{Deserialize, Serialize};

/// Background reachability probe against the resource host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    pub probe_enabled: bool,
    /// Seconds between probes (valid range: 1-300).
    pub probe_interval_secs: u32,
    /// Per-probe connect timeout in milliseconds (valid range: 100-30000).
    pub probe_timeout_ms: u32,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_enabled: true,
            probe_interval_secs: 5,
            probe_timeout_ms: 2000,
        }
    }
}
