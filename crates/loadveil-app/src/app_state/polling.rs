//! Polling of surface events and connectivity updates.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::LoadveilApp;
use super::types::POLL_INTERVAL;

impl LoadveilApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_surface_events();
            self.poll_connectivity();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Feed everything the WebView reported since the last poll to the
    /// coordinator, in arrival order.
    pub(super) fn poll_surface_events(&mut self) {
        let events = match self.surface {
            Some(ref surface) => surface.drain_events(),
            None => return,
        };
        for event in events {
            self.coordinator.handle_surface_event(event);
        }
    }

    pub(super) fn poll_connectivity(&mut self) {
        let Some(ref rx) = self.connectivity_rx else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(available) => self.coordinator.set_connectivity(available),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Connectivity probe stopped");
                    self.connectivity_rx = None;
                    break;
                }
            }
        }
    }
}
