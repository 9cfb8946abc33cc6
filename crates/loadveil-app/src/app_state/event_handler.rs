//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::bounds::full_window_bounds;
use super::core::LoadveilApp;

impl ApplicationHandler for LoadveilApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.subscribe_window_title();
        self.attach_surface();
        self.start_connectivity_probe();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_surface_bounds(size);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl LoadveilApp {
    /// Stretch the webview over the resized window.
    fn sync_surface_bounds(&self, size: PhysicalSize<u32>) {
        let (Some(window), Some(surface)) = (&self.window, &self.surface) else {
            return;
        };
        let bounds = full_window_bounds(size, window.scale_factor());
        if let Err(e) = surface.set_bounds(bounds) {
            tracing::warn!("Failed to resize loading surface: {e}");
        }
    }
}
