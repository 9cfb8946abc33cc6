//! Window title management: shows the overlay caption next to the app title.

use std::sync::Arc;

use loadveil_webview::{LoadStatus, OverlayView};

use super::core::LoadveilApp;

/// Format: "{base} - {overlay label}", or just `base` when nothing is shown.
pub(super) fn compose_title(base: &str, status: &LoadStatus) -> String {
    let view = OverlayView::for_status(status);
    if view.is_visible() {
        format!("{base} - {}", view.label())
    } else {
        base.to_string()
    }
}

// =============================================================================
// WINDOW TITLE
// =============================================================================

impl LoadveilApp {
    /// Keep the window title in sync with every status change.
    pub(super) fn subscribe_window_title(&mut self) {
        let Some(window) = self.window.as_ref().map(Arc::clone) else {
            return;
        };
        let base = self.config.window.title.clone();
        window.set_title(&compose_title(&base, self.coordinator.status()));
        self.coordinator
            .subscribe(move |status| window.set_title(&compose_title(&base, status)));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use loadveil_config::schema::LoadveilConfig;

    #[test]
    fn title_shows_progress_percent() {
        let title = compose_title("Loadveil", &LoadStatus::Progressing(0.42));
        assert_eq!(title, "Loadveil - Loading: 42%");
    }

    #[test]
    fn title_shows_error_and_offline() {
        assert_eq!(
            compose_title("Loadveil", &LoadStatus::Failed("boom".into())),
            "Loadveil - Error: boom"
        );
        assert_eq!(
            compose_title("Loadveil", &LoadStatus::Offline),
            "Loadveil - No connection"
        );
    }

    #[test]
    fn title_is_bare_when_finished_or_standby() {
        assert_eq!(compose_title("Loadveil", &LoadStatus::Finished), "Loadveil");
        assert_eq!(compose_title("Loadveil", &LoadStatus::Standby), "Loadveil");
    }

    #[test]
    fn subscribe_without_window_does_not_panic() {
        let mut app = LoadveilApp::new(LoadveilConfig::default(), false);
        // window is None on a fresh app, should silently return
        app.subscribe_window_title();
    }
}
