//! LoadveilApp struct definition and constructor.

use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use loadveil_config::schema::LoadveilConfig;
use loadveil_webview::{LoadCoordinator, LoadRequest, WebViewSurface};

/// Top-level application state.
pub struct LoadveilApp {
    pub(super) config: LoadveilConfig,
    pub(super) coordinator: LoadCoordinator,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) surface: Option<Rc<WebViewSurface>>,

    // Connectivity probe
    pub(super) forced_offline: bool,
    pub(super) connectivity_rx: Option<std::sync::mpsc::Receiver<bool>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) last_poll: Instant,
}

impl LoadveilApp {
    pub fn new(config: LoadveilConfig, forced_offline: bool) -> Self {
        let request = LoadRequest::new(config.resource.url.clone()).with_timeout(
            Duration::from_secs(u64::from(config.resource.timeout_secs)),
        );
        Self {
            coordinator: LoadCoordinator::from_request(request),
            config,
            window: None,
            surface: None,
            forced_offline,
            connectivity_rx: None,
            tokio_runtime: None,
            last_poll: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadveil_webview::LoadStatus;

    #[test]
    fn request_follows_resource_config() {
        let mut config = LoadveilConfig::default();
        config.resource.url = "https://example.com/".into();
        config.resource.timeout_secs = 30;

        let app = LoadveilApp::new(config, false);
        let request = app.coordinator.request();
        assert_eq!(request.url, "https://example.com/");
        assert_eq!(request.timeout, Duration::from_secs(30));
        assert_eq!(*app.coordinator.status(), LoadStatus::Standby);
    }
}
