//! Content surface ownership, loading flag and pull-to-refresh.

use maliennement_common::ShellError;
use maliennement_webview::{BrowserSurface, SurfaceEvent};
use tracing::{debug, warn};

use super::loading::LoadingState;

/// The one address the content surface opens. Not configurable.
pub const DESTINATION_URL: &str = "https://www.maliennement.com";

/// Owns the content surface handle.
///
/// The handle is absent until [`ContentHost::mount`] and there is never
/// more than one. Other components only read it after checking
/// [`ContentHost::is_ready`].
pub struct ContentHost<S> {
    surface: Option<S>,
    loading: LoadingState,
    refreshing: bool,
}

impl<S> Default for ContentHost<S> {
    fn default() -> Self {
        Self {
            surface: None,
            loading: LoadingState::Loading,
            refreshing: false,
        }
    }
}

impl<S: BrowserSurface> ContentHost<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a freshly built surface. The surface has already
    /// been told to load [`DESTINATION_URL`], so the host starts out loading.
    pub fn mount(&mut self, surface: S) -> maliennement_common::Result<()> {
        if self.surface.is_some() {
            return Err(ShellError::WebView(
                "content surface already mounted".into(),
            ));
        }
        self.surface = Some(surface);
        self.loading = LoadingState::Loading;
        self.refreshing = false;
        Ok(())
    }

    /// Drop the handle, returning it to the caller.
    pub fn unmount(&mut self) -> Option<S> {
        self.refreshing = false;
        self.surface.take()
    }

    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Feed one surface event through the host.
    ///
    /// `BackRequested` is not handled here; it goes to the lifecycle
    /// dispatcher.
    pub fn handle_event(&mut self, event: &SurfaceEvent) {
        if let Some(surface) = self.surface.as_mut() {
            surface.observe(event);
        }

        match event {
            SurfaceEvent::PullStarted => self.refreshing = true,
            SurfaceEvent::PullReleased => self.refresh(),
            SurfaceEvent::RefreshRequested => {
                self.refreshing = true;
                self.refresh();
            }
            SurfaceEvent::PageError {
                code,
                description,
                failing_url,
            } => {
                debug!(code, %description, %failing_url, "page load failed");
                self.loading = self.loading.on_event(event);
            }
            _ => self.loading = self.loading.on_event(event),
        }
    }

    /// Reload the current address and drop the refreshing flag right away.
    ///
    /// The loading flag is left alone; the reload's own page events drive it.
    pub fn refresh(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            if let Err(e) = surface.reload() {
                warn!(error = %e, "reload failed");
            }
        }
        self.refreshing = false;
    }
}
