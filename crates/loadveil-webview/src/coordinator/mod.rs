//! Load coordination.
//!
//! `LoadCoordinator` owns the current [`LoadStatus`] and is the only thing
//! that writes it. Progress reports, navigation callbacks and connectivity
//! changes all funnel through here and must be delivered from a single
//! control thread; nothing in this module blocks.

use std::rc::Rc;
use std::time::Duration;

use loadveil_common::LoadStatus;
use tracing::{debug, info, warn};

use crate::events::SurfaceEvent;
use crate::navigation::{NavigationKind, NavigationObserver, NavigationTracker};
use crate::progress::ProgressStream;
use crate::surface::{LoadRequest, LoadSurface, SurfaceFactory};


type StatusObserver = Box<dyn FnMut(&LoadStatus)>;

/// Owns the load status of one resource and decides when to (re)load it.
pub struct LoadCoordinator {
    request: LoadRequest,
    status: LoadStatus,
    progress: ProgressStream,
    navigation: NavigationTracker,
    factory: Option<Box<dyn SurfaceFactory>>,
    /// Set once a load has been triggered; progress before that is ignored.
    monitoring: bool,
    attempt: u64,
    observers: Vec<StatusObserver>,
}

impl LoadCoordinator {
    /// Coordinator for `url` with the default fetch timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self::from_request(LoadRequest::new(url))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        Self::from_request(LoadRequest::new(url).with_timeout(timeout))
    }

    pub fn from_request(request: LoadRequest) -> Self {
        Self {
            request,
            status: LoadStatus::Standby,
            progress: ProgressStream::new(),
            navigation: NavigationTracker::new(),
            factory: None,
            monitoring: false,
            attempt: 0,
            observers: Vec::new(),
        }
    }

    /// The current status.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The request issued on every load attempt.
    pub fn request(&self) -> &LoadRequest {
        &self.request
    }

    /// Number of load attempts actually started.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Register an observer called synchronously on every status assignment,
    /// in registration order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&LoadStatus) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Store the surface factory and load immediately.
    ///
    /// Attaching again replaces the previous factory and reloads.
    pub fn attach_surface<F>(&mut self, factory: F)
    where
        F: SurfaceFactory + 'static,
    {
        if self.factory.is_some() {
            debug!("replacing previously attached surface factory");
        }
        self.factory = Some(Box::new(factory));
        self.trigger_load();
    }

    /// Drop the surface factory. Later triggers become no-ops; the status
    /// is left as it is.
    pub fn detach_surface(&mut self) {
        if self.factory.take().is_some() {
            info!(attempt = self.attempt, "surface detached");
        }
    }

    /// Start a fresh load attempt of the configured resource.
    ///
    /// Silently does nothing when no surface is available.
    pub fn trigger_load(&mut self) {
        let Some(surface) = self.obtain_surface() else {
            debug!(url = %self.request.url, "no surface available, load not started");
            return;
        };

        self.attempt += 1;
        info!(
            attempt = self.attempt,
            url = %self.request.url,
            timeout_secs = self.request.timeout.as_secs(),
            "starting load"
        );

        self.set_status(LoadStatus::Progressing(0.0));
        self.monitoring = true;

        if let Err(e) = surface.begin_load(&self.request) {
            warn!(attempt = self.attempt, error = %e, "surface refused to load");
            self.set_status(LoadStatus::Failed(e.to_string()));
        }
    }

    /// React to a connectivity change.
    ///
    /// Losing connectivity always forces `Offline`. Regaining it reloads
    /// only when currently `Offline`.
    pub fn set_connectivity(&mut self, available: bool) {
        match (available, &self.status) {
            (true, LoadStatus::Offline) => {
                info!("connectivity restored, reloading");
                self.trigger_load();
            }
            (false, _) => {
                info!("connectivity lost");
                self.set_status(LoadStatus::Offline);
            }
            _ => {}
        }
    }

    /// Feed one raw progress ratio from the surface.
    pub fn report_progress(&mut self, ratio: f64) {
        if !self.monitoring {
            debug!(ratio, "progress before any load, ignoring");
            return;
        }

        let Some(status) = self.progress.report(ratio) else {
            return;
        };

        // Only a connectivity signal leaves Offline.
        if self.status == LoadStatus::Offline {
            debug!(ratio, "progress while offline, ignoring");
            return;
        }

        self.set_status(status);
    }

    /// Route one surface event to the progress stream or navigation callbacks.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Progress(ratio) => self.report_progress(ratio),
            SurfaceEvent::Started => self.on_start(),
            SurfaceEvent::Committed => self.on_commit(),
            SurfaceEvent::Finished => self.on_finish(),
            SurfaceEvent::Failed(reason) => self.on_fail(&reason),
            SurfaceEvent::FailedProvisional(reason) => self.on_fail_provisional(&reason),
            SurfaceEvent::PolicyRequested { url, kind } => {
                let has_current_url = self
                    .obtain_surface()
                    .is_some_and(|surface| surface.current_url().is_some());
                debug!(url = %url, ?kind, has_current_url, "navigation policy requested");
                self.on_decide_policy(kind, has_current_url);
            }
            SurfaceEvent::TitleChanged(title) => {
                debug!(title = %title, "document title changed");
            }
        }
    }

    fn obtain_surface(&mut self) -> Option<Rc<dyn LoadSurface>> {
        self.factory.as_mut().and_then(|factory| factory.surface())
    }

    fn set_status(&mut self, status: LoadStatus) {
        debug!(attempt = self.attempt, from = %self.status, to = %status, "status change");
        self.status = status;
        for observer in &mut self.observers {
            observer(&self.status);
        }
    }
}

impl NavigationObserver for LoadCoordinator {
    fn on_start(&mut self) {
        if let Some(status) = self.navigation.start() {
            self.set_status(status);
        }
    }

    fn on_commit(&mut self) {
        self.navigation.commit();
    }

    fn on_finish(&mut self) {
        let status = self.navigation.finish();
        self.set_status(status);
    }

    fn on_fail(&mut self, reason: &str) {
        warn!(attempt = self.attempt, reason, "navigation failed");
        let status = self.navigation.fail(reason);
        self.set_status(status);
    }

    fn on_fail_provisional(&mut self, reason: &str) {
        warn!(attempt = self.attempt, reason, "provisional navigation failed");
        let status = self.navigation.fail(reason);
        self.set_status(status);
    }

    fn on_decide_policy(&mut self, kind: NavigationKind, has_current_url: bool) -> bool {
        self.navigation.decide_policy(kind, has_current_url)
    }
}

impl std::fmt::Debug for LoadCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadCoordinator")
            .field("request", &self.request)
            .field("status", &self.status)
            .field("attempt", &self.attempt)
            .field("monitoring", &self.monitoring)
            .field("observers", &self.observers.len())
            .finish()
    }
}
