//! Loading overlay core for an embedded web surface.
//!
//! Derives a user-facing [`LoadStatus`] from the progress ratios and
//! navigation lifecycle events an embedded webview reports:
//! - Deduplicating progress stream
//! - Navigation lifecycle tracking
//! - Load coordination and connectivity-driven retry
//! - Overlay view model for the presentation layer
//! - A `wry`-backed rendering surface

pub mod coordinator;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;
pub mod overlay;
pub mod progress;
pub mod surface;

pub use coordinator::LoadCoordinator;
pub use events::SurfaceEvent;
pub use ipc::{IpcMessage, IpcPayload};
pub use loadveil_common::{LoadStatus, StatusKind};
pub use manager::{SurfaceConfig, WebViewSurface};
pub use navigation::{NavigationKind, NavigationObserver, NavigationTracker};
pub use overlay::OverlayView;
pub use progress::ProgressStream;
pub use surface::{LoadRequest, LoadSurface, SurfaceFactory, DEFAULT_LOAD_TIMEOUT};
