//! Graceful shutdown: stop the probe, then drop the webview.

use super::core::LoadveilApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl LoadveilApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Drop the connectivity receiver (the probe stops on its next change)
    /// 2. Shut down the tokio runtime (cancels the probe task)
    /// 3. Detach and drop the loading surface
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.connectivity_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        self.coordinator.detach_surface();
        self.surface = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
