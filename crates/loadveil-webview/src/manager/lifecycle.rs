use std::cell::RefCell;
use std::sync::Arc;

use loadveil_common::SurfaceError;
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::PROGRESS_INIT_SCRIPT;

use super::deadline::LoadDeadline;
use super::types::SurfaceConfig;
use super::{new_sink, WebViewSurface};

impl WebViewSurface {
    /// Create the WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window and
    /// starts empty; nothing is fetched until `begin_load`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: &SurfaceConfig,
    ) -> Result<Self, SurfaceError> {
        let events = new_sink();

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_initialization_script(PROGRESS_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events));

        let webview = builder
            .build_as_child(window)
            .map_err(|e| SurfaceError::Create(e.to_string()))?;

        debug!(?bounds, "loading WebView created");

        Ok(Self {
            webview,
            events,
            current_url: RefCell::new(None),
            deadline: RefCell::new(LoadDeadline::default()),
        })
    }
}
