//! Window creation and loading surface setup.

use std::rc::Rc;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use loadveil_webview::{LoadSurface, SurfaceConfig, WebViewSurface};

use super::bounds::full_window_bounds;
use super::core::LoadveilApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl LoadveilApp {
    /// Create the window and the loading WebView inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let win = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(win.title.clone())
            .with_transparent(win.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(win.width),
                f64::from(win.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let surface_config = SurfaceConfig {
            transparent: win.transparent,
            devtools: win.devtools,
            ..SurfaceConfig::default()
        };
        let bounds = full_window_bounds(window.inner_size(), window.scale_factor());

        let surface = match WebViewSurface::create(window.as_ref(), bounds, &surface_config) {
            Ok(surface) => Rc::new(surface),
            Err(e) => {
                tracing::error!("Failed to create loading surface: {e}");
                return false;
            }
        };

        self.window = Some(window);
        self.surface = Some(surface);
        tracing::info!("Window and loading surface created");
        true
    }

    /// Hand the surface to the coordinator, which starts the first load.
    ///
    /// When forced offline the surface is never attached, so no navigation
    /// can move the status out of `Offline`.
    pub(super) fn attach_surface(&mut self) {
        if self.forced_offline {
            tracing::info!("Forced offline, loading surface not attached");
            self.coordinator.set_connectivity(false);
            return;
        }

        let Some(surface) = self.surface.as_ref().map(Rc::clone) else {
            tracing::warn!("No loading surface to attach");
            return;
        };
        self.coordinator
            .attach_surface(move || Some(Rc::clone(&surface) as Rc<dyn LoadSurface>));
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::LoadveilApp;
    use loadveil_config::schema::LoadveilConfig;
    use loadveil_webview::LoadStatus;

    #[test]
    fn attach_without_surface_leaves_standby() {
        let mut app = LoadveilApp::new(LoadveilConfig::default(), false);
        app.attach_surface();
        assert_eq!(*app.coordinator.status(), LoadStatus::Standby);
        assert_eq!(app.coordinator.attempt(), 0);
    }

    #[test]
    fn forced_offline_stays_offline_without_loading() {
        let mut app = LoadveilApp::new(LoadveilConfig::default(), true);
        app.attach_surface();
        assert_eq!(*app.coordinator.status(), LoadStatus::Offline);
        assert_eq!(app.coordinator.attempt(), 0);

        // A stray poll must not leave Offline either.
        app.poll_surface_events();
        app.coordinator.trigger_load();
        assert_eq!(*app.coordinator.status(), LoadStatus::Offline);
        assert_eq!(app.coordinator.attempt(), 0);
    }
}
