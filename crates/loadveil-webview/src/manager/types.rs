/// Configuration for creating the loading WebView.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Loadveil/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
            autoplay: true,
        }
    }
}
