//! Navigation lifecycle contract.
//!
//! A rendering surface reports discrete lifecycle events for each
//! navigation. [`NavigationObserver`] is the set of callbacks the core
//! reacts to; [`NavigationTracker`] holds the per-navigation "started"
//! flag and decides which status, if any, each event produces.

use loadveil_common::LoadStatus;

/// What triggered a navigation, as classified by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationKind {
    LinkActivated,
    FormSubmitted,
    BackForward,
    Reload,
    FormResubmitted,
    /// Programmatic or unclassified navigation.
    #[default]
    Other,
}

/// Lifecycle callbacks consumed from a rendering surface.
pub trait NavigationObserver {
    /// A new navigation began.
    fn on_start(&mut self);

    /// The navigation was accepted and content started arriving.
    fn on_commit(&mut self);

    /// The navigation completed.
    fn on_finish(&mut self);

    /// The navigation failed after it was committed.
    fn on_fail(&mut self, reason: &str);

    /// The navigation failed before it was committed.
    fn on_fail_provisional(&mut self, reason: &str);

    /// Asked before a navigation proceeds. Returns whether it is allowed.
    fn on_decide_policy(&mut self, kind: NavigationKind, has_current_url: bool) -> bool;
}

/// Per-navigation state behind the observer callbacks.
///
/// `NotStarted -> (policy: Other with a URL loaded) -> Started -> (commit) -> NotStarted`.
/// While `Started`, a start event does not emit a zero-progress status, so
/// redirects and sub-navigations inside one load do not reset the bar.
#[derive(Debug, Default)]
pub struct NavigationTracker {
    started: bool,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn start(&mut self) -> Option<LoadStatus> {
        if self.started {
            None
        } else {
            Some(LoadStatus::Progressing(0.0))
        }
    }

    pub fn commit(&mut self) {
        self.started = false;
    }

    pub fn finish(&mut self) -> LoadStatus {
        LoadStatus::Finished
    }

    pub fn fail(&mut self, reason: &str) -> LoadStatus {
        LoadStatus::Failed(reason.to_string())
    }

    /// Always allows. An `Other` navigation on a surface that already has a
    /// URL will not be followed by its own start event, so it is marked
    /// started up front.
    pub fn decide_policy(&mut self, kind: NavigationKind, has_current_url: bool) -> bool {
        if kind == NavigationKind::Other && has_current_url {
            self.started = true;
        }
        true
    }
}
