//! Overlay view model.
//!
//! Maps a [`LoadStatus`] to the sub-view the presentation layer should
//! draw on top of the webview. No painting happens here.

use loadveil_common::LoadStatus;

/// Webview opacity once the resource is shown.
const OPACITY_FINISHED: f64 = 1.0;
/// Webview opacity while the overlay covers it.
const OPACITY_COVERED: f64 = 0.5;

/// What to draw over the webview for a given status.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayView {
    /// Progress bar with a percentage caption.
    Progress { ratio: f64, percent: i32 },
    /// Error text, shown verbatim.
    Error { reason: String },
    /// The "no connection" indicator; carries no error text.
    Offline,
    /// Nothing drawn (standby or finished).
    Empty,
}

impl OverlayView {
    pub fn for_status(status: &LoadStatus) -> Self {
        match status {
            LoadStatus::Progressing(ratio) => OverlayView::Progress {
                ratio: *ratio,
                percent: progress_percent(*ratio),
            },
            LoadStatus::Failed(reason) => OverlayView::Error {
                reason: reason.clone(),
            },
            LoadStatus::Offline => OverlayView::Offline,
            LoadStatus::Standby | LoadStatus::Finished => OverlayView::Empty,
        }
    }

    /// Caption text for this overlay. Empty for [`OverlayView::Empty`].
    pub fn label(&self) -> String {
        match self {
            OverlayView::Progress { percent, .. } => format!("Loading: {percent}%"),
            OverlayView::Error { reason } => format!("Error: {reason}"),
            OverlayView::Offline => "No connection".to_string(),
            OverlayView::Empty => String::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, OverlayView::Empty)
    }
}

/// Whole-number percentage, truncated toward zero.
pub fn progress_percent(ratio: f64) -> i32 {
    (ratio * 100.0) as i32
}

/// How opaque the webview underneath should be.
pub fn surface_opacity(status: &LoadStatus) -> f64 {
    if status.is_successful() {
        OPACITY_FINISHED
    } else {
        OPACITY_COVERED
    }
}
