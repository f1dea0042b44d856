//! Content surface lifecycle.
//!
//! `SurfaceManager` builds `wry::WebView` children of the host window: the
//! single content surface and the overlay surfaces drawn above it.
//! [`BrowserSurface`] is the seam the shell's content host is written
//! against, so everything above this crate can run without a display.

mod content;
mod handlers;
mod manager;
mod settings;

pub use content::ContentSurface;
pub use handlers::is_navigation_allowed;
pub use manager::SurfaceManager;
pub use settings::{CacheMode, MixedContentMode, SurfaceSettings};

use crate::events::SurfaceEvent;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error(transparent)]
    Engine(#[from] wry::Error),

    #[error("invalid navigation state: {0}")]
    InvalidState(String),
}

/// Operations the shell needs from an embedded browser surface.
pub trait BrowserSurface {
    /// URL of the current history entry.
    fn current_url(&self) -> Option<&str>;

    /// Reload the current address.
    fn reload(&mut self) -> Result<(), SurfaceError>;

    /// Whether there is an entry behind the current one.
    fn can_go_back(&self) -> bool;

    /// Navigate one entry back. No-op at the start of history.
    fn go_back(&mut self) -> Result<(), SurfaceError>;

    /// Opaque serialized navigation state, `None` when there is nothing to
    /// save yet.
    fn save_state(&self) -> Option<String>;

    /// Apply a blob produced by [`BrowserSurface::save_state`].
    fn restore_state(&mut self, blob: &str) -> Result<(), SurfaceError>;

    /// Let the surface update its own bookkeeping from an event it emitted.
    fn observe(&mut self, event: &SurfaceEvent);
}
