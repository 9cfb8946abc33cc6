use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::SurfaceEvent;
use crate::ipc::IpcMessage;
use crate::navigation::NavigationKind;

use super::WebViewSurface;

/// Shared event sink written by WebView callbacks, drained by the host.
pub(crate) type EventSink = Arc<Mutex<Vec<SurfaceEvent>>>;

pub(crate) fn push_event(events: &EventSink, event: SurfaceEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

/// Pages the WebView may show before any real load was requested.
fn is_placeholder_url(url: &str) -> bool {
    url.is_empty() || url.starts_with("about:")
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewSurface {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();

            let Some(message) = IpcMessage::from_json(body) else {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            };

            debug!(kind = %message.kind, "IPC message from JS");
            if let Some(event) = message.into_surface_event() {
                push_event(&events, event);
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            if is_placeholder_url(&url) {
                debug!(url = %url, "ignoring placeholder page load");
                return;
            }
            let event = SurfaceEvent::from(event);
            debug!(?event, url = %url, "page load");
            push_event(&events, event);
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            push_event(&events, SurfaceEvent::TitleChanged(title));
        })
    }

    /// Every navigation is allowed. `wry` does not say what triggered a
    /// navigation, so all of them are reported as [`NavigationKind::Other`].
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            debug!(url = %url, "navigation requested");
            push_event(
                &events,
                SurfaceEvent::PolicyRequested {
                    url,
                    kind: NavigationKind::Other,
                },
            );
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
