//! The `wry`-backed loading surface.
//!
//! `WebViewSurface` owns one child `wry::WebView`. Its callbacks push
//! [`SurfaceEvent`]s into a shared sink which the host drains on the
//! event-loop thread and hands to the coordinator.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::warn;
use wry::WebView;

use crate::events::SurfaceEvent;

mod deadline;
mod handle;
pub(crate) mod handlers;
mod lifecycle;
mod types;

pub use deadline::TIMEOUT_REASON;
pub use types::SurfaceConfig;

use deadline::LoadDeadline;
use handlers::EventSink;

/// A WebView that loads one resource at a time and reports how it goes.
pub struct WebViewSurface {
    webview: WebView,
    /// Event sink, events are pushed here for the main event loop to consume.
    events: EventSink,
    /// URL of the last requested load. `None` until the first one.
    current_url: RefCell<Option<String>>,
    deadline: RefCell<LoadDeadline>,
}

impl WebViewSurface {
    /// Drain all pending events.
    ///
    /// A load that outlived its timeout without finishing or failing yields
    /// a trailing [`SurfaceEvent::FailedProvisional`] with [`TIMEOUT_REASON`].
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        let mut drained = match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };

        if self.deadline.borrow_mut().check(&drained, Instant::now()) {
            warn!(url = ?self.current_url.borrow(), "load timed out");
            drained.push(SurfaceEvent::FailedProvisional(TIMEOUT_REASON.to_string()));
        }
        drained
    }
}

impl std::fmt::Debug for WebViewSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebViewSurface")
            .field("current_url", &self.current_url.borrow())
            .field("deadline", &self.deadline.borrow())
            .finish_non_exhaustive()
    }
}

fn new_sink() -> EventSink {
    Arc::new(Mutex::new(Vec::new()))
}
