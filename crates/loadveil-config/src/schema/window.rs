//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Base window title; the overlay label is appended to it.
    pub title: String,
    /// Initial logical width (valid range: 200-7680).
    pub width: u32,
    /// Initial logical height (valid range: 200-4320).
    pub height: u32,
    pub transparent: bool,
    /// Enable webview dev tools (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Loadveil".into(),
            width: 1280,
            height: 800,
            transparent: false,
            devtools: cfg!(debug_assertions),
        }
    }
}
