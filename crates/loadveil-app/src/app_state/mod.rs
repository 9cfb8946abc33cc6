//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the loading surface, the coordinator and
//! the connectivity probe.

mod bounds;
mod connectivity;
mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod title;
mod types;

pub use core::LoadveilApp;
