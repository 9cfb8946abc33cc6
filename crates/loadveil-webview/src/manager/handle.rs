use std::time::Instant;

use loadveil_common::SurfaceError;
use tracing::debug;

use crate::surface::{LoadRequest, LoadSurface};

use super::WebViewSurface;

impl WebViewSurface {
    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), SurfaceError> {
        self.webview
            .set_bounds(bounds)
            .map_err(|e| SurfaceError::Load(e.to_string()))
    }
}

impl LoadSurface for WebViewSurface {
    fn begin_load(&self, request: &LoadRequest) -> Result<(), SurfaceError> {
        *self.current_url.borrow_mut() = Some(request.url.clone());
        self.webview
            .load_url(&request.url)
            .map_err(|e| SurfaceError::Load(e.to_string()))?;
        let mut deadline = self.deadline.borrow_mut();
        if deadline.is_armed() {
            debug!("previous load still pending, deadline replaced");
        }
        deadline.arm(Instant::now(), request.timeout);
        debug!(url = %request.url, timeout = ?request.timeout, "load issued");
        Ok(())
    }

    fn current_url(&self) -> Option<String> {
        self.current_url.borrow().clone()
    }
}
