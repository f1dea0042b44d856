//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the splash, the content host, the overlays and
//! the saved navigation state.

mod core;
mod event_handler;
mod init;
mod keys;
mod polling;
mod session;
mod shutdown;
mod types;
mod ui_state;

pub use self::core::ShellApp;
