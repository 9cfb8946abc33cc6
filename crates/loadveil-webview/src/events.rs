//! Surface event types.

use crate::navigation::NavigationKind;

/// Events emitted by a rendering surface, in the order it observed them.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Estimated load progress, nominally in `[0, 1]`.
    Progress(f64),
    /// A navigation started.
    Started,
    /// The navigation committed; the new document exists.
    Committed,
    /// The navigation finished.
    Finished,
    /// The navigation failed after commit.
    Failed(String),
    /// The navigation failed before commit.
    FailedProvisional(String),
    /// A navigation is about to happen.
    PolicyRequested { url: String, kind: NavigationKind },
    /// Document title changed.
    TitleChanged(String),
}

impl From<wry::PageLoadEvent> for SurfaceEvent {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

impl SurfaceEvent {
    /// Whether this event ends the current load attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SurfaceEvent::Finished | SurfaceEvent::Failed(_) | SurfaceEvent::FailedProvisional(_)
        )
    }
}
