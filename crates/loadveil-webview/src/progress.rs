//! Deduplicating progress pipe.
//!
//! The rendering surface reports its estimated progress repeatedly and
//! often with the same value twice in a row. `ProgressStream` turns that
//! raw signal into status updates, dropping exact repeats before they
//! reach the coordinator.

use loadveil_common::LoadStatus;
use tracing::{debug, warn};

/// Converts raw progress ratios into [`LoadStatus`] updates.
///
/// Updates are produced synchronously, one per accepted report, in the
/// order `report` is called.
#[derive(Debug, Default)]
pub struct ProgressStream {
    previous: Option<f64>,
}

impl ProgressStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw ratio.
    ///
    /// Returns `None` when the value is an exact repeat of the previous
    /// report. Ratios below 1.0 map to `Progressing`, anything at or above
    /// 1.0 to `Finished`. Out-of-range values pass through unclamped; NaN is
    /// dropped because it can never compare equal to itself.
    pub fn report(&mut self, ratio: f64) -> Option<LoadStatus> {
        if ratio.is_nan() {
            warn!("dropping NaN progress report");
            return None;
        }

        if self.previous == Some(ratio) {
            debug!(ratio, "duplicate progress report dropped");
            return None;
        }
        self.previous = Some(ratio);

        if !(0.0..=1.0).contains(&ratio) {
            warn!(ratio, "progress ratio outside [0, 1]");
        }

        Some(if ratio < 1.0 {
            LoadStatus::Progressing(ratio)
        } else {
            LoadStatus::Finished
        })
    }

    /// The last raw value that was accepted.
    pub fn previous(&self) -> Option<f64> {
        self.previous
    }
}
