//! Embedded browser surfaces for the shell.
//!
//! Wraps the `wry` crate to provide:
//! - The content surface: the one webview showing the destination site
//! - Overlay surfaces: the splash panel and the loading indicator
//! - A bridge script reporting progress, scroll, history and gestures over IPC
//! - Navigation history tracking with a serializable saved state

pub mod bounds;
pub mod events;
pub mod history;
pub mod ipc;
pub mod overlay;
pub mod surface;

pub use events::{EventSink, PageLoadState, SurfaceEvent};
pub use history::{NavigationHistory, NavigationState};
pub use overlay::{OverlayKind, OverlaySurface};
pub use surface::{
    BrowserSurface, CacheMode, ContentSurface, MixedContentMode, SurfaceError, SurfaceManager,
    SurfaceSettings,
};
