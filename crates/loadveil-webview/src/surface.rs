//! The seam between the coordinator and whatever renders the resource.

use std::rc::Rc;
use std::time::Duration;

use loadveil_common::SurfaceError;

/// Fetch timeout handed to the surface with every load.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(12);

/// One request for the configured resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: String,
    /// Enforced by the surface, not by the coordinator.
    pub timeout: Duration,
}

impl LoadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// An embedded component able to fetch and display a resource.
pub trait LoadSurface {
    /// Start fetching `request`. Progress and lifecycle are reported back
    /// asynchronously as surface events.
    fn begin_load(&self, request: &LoadRequest) -> Result<(), SurfaceError>;

    /// The URL currently loaded or being loaded, if any.
    fn current_url(&self) -> Option<String>;
}

/// Source of the rendering surface. `None` means no usable surface right now.
pub trait SurfaceFactory {
    fn surface(&mut self) -> Option<Rc<dyn LoadSurface>>;
}

impl<F> SurfaceFactory for F
where
    F: FnMut() -> Option<Rc<dyn LoadSurface>>,
{
    fn surface(&mut self) -> Option<Rc<dyn LoadSurface>> {
        self()
    }
}
