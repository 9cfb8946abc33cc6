//! Configuration schema types for Loadveil.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod connectivity;
mod resource;
mod system;
mod window;

pub use connectivity::*;
pub use resource::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Loadveil.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoadveilConfig {
    pub resource: ResourceConfig,
    pub connectivity: ConnectivityConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
