//! Fetch timeout enforcement for surfaces that have no native one.

use std::time::{Duration, Instant};

use crate::events::SurfaceEvent;

/// Diagnostic reported when a load exceeds its timeout.
pub const TIMEOUT_REASON: &str = "The request timed out.";

/// Deadline for the in-flight load, armed by `begin_load`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LoadDeadline {
    at: Option<Instant>,
}

impl LoadDeadline {
    pub(crate) fn arm(&mut self, now: Instant, timeout: Duration) {
        self.at = Some(now + timeout);
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Inspect a drained batch of events. Any terminal event disarms the
    /// deadline. Returns `true` exactly once when it has passed unanswered.
    pub(crate) fn check(&mut self, events: &[SurfaceEvent], now: Instant) -> bool {
        if events.iter().any(SurfaceEvent::is_terminal) {
            self.at = None;
            return false;
        }
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(12);

    #[test]
    fn unarmed_never_expires() {
        let mut deadline = LoadDeadline::default();
        assert!(!deadline.is_armed());
        assert!(!deadline.check(&[], Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn expires_once_after_timeout() {
        let start = Instant::now();
        let mut deadline = LoadDeadline::default();
        deadline.arm(start, TIMEOUT);

        assert!(!deadline.check(&[], start + Duration::from_secs(11)));
        assert!(deadline.check(&[], start + TIMEOUT));
        assert!(!deadline.is_armed());
        assert!(!deadline.check(&[], start + Duration::from_secs(20)));
    }

    #[test]
    fn terminal_event_disarms() {
        let start = Instant::now();
        let mut deadline = LoadDeadline::default();
        deadline.arm(start, TIMEOUT);

        let events = [SurfaceEvent::Progress(0.5), SurfaceEvent::Finished];
        assert!(!deadline.check(&events, start + Duration::from_secs(30)));
        assert!(!deadline.is_armed());
    }

    #[test]
    fn non_terminal_events_keep_it_armed() {
        let start = Instant::now();
        let mut deadline = LoadDeadline::default();
        deadline.arm(start, TIMEOUT);

        let events = [SurfaceEvent::Started, SurfaceEvent::Committed];
        assert!(!deadline.check(&events, start + Duration::from_secs(1)));
        assert!(deadline.is_armed());
    }

    #[test]
    fn rearming_moves_the_deadline() {
        let start = Instant::now();
        let mut deadline = LoadDeadline::default();
        deadline.arm(start, TIMEOUT);
        assert!(deadline.is_armed());
        deadline.arm(start + Duration::from_secs(10), TIMEOUT);
        assert!(deadline.is_armed());
        assert!(!deadline.check(&[], start + Duration::from_secs(15)));
        assert!(deadline.check(&[], start + Duration::from_secs(22)));
    }
}
