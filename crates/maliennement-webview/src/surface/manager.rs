use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::events::{EventSink, SurfaceEvent};
use crate::ipc::bridge_script;
use crate::overlay::{OverlayKind, OverlaySurface};

use super::content::ContentSurface;
use super::settings::SurfaceSettings;
use super::SurfaceError;

/// Builds the shell's webviews and owns the content event queue.
pub struct SurfaceManager {
    settings: SurfaceSettings,
    events: EventSink,
}

impl SurfaceManager {
    pub fn new(settings: SurfaceSettings) -> Self {
        Self {
            settings,
            events: EventSink::new(),
        }
    }

    /// Drain all pending content surface events.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        self.events.drain()
    }

    /// Build the content surface as a child of `window` and start loading
    /// `url` right away.
    pub fn create_content<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        url: &str,
    ) -> Result<ContentSurface, SurfaceError> {
        let settings = &self.settings;
        if !settings.javascript {
            warn!("script execution cannot be disabled on this engine; ignoring");
        }

        let script = bridge_script(settings.pull_threshold);
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(settings.devtools)
            .with_hotkeys_zoom(settings.zoom)
            .with_incognito(settings.incognito())
            .with_back_forward_navigation_gestures(false)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(true)
            .with_initialization_script(&script);

        if let Some(ua) = &settings.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, self.events.clone());
        builder = Self::attach_page_load_handler(builder, self.events.clone());
        builder = Self::attach_title_handler(builder, self.events.clone());
        builder = Self::attach_navigation_handler(builder, settings.mixed_content);

        let webview = builder.with_url(url).build_as_child(window)?;
        debug!(url, "content surface created");

        Ok(ContentSurface::new(webview, self.events.clone(), url))
    }

    /// Build an overlay surface (splash panel or loading indicator).
    pub fn create_overlay<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        kind: OverlayKind,
    ) -> Result<OverlaySurface, SurfaceError> {
        let webview = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(true)
            .with_devtools(false)
            .with_focused(false)
            .with_html(kind.html())
            .build_as_child(window)?;

        debug!(?kind, "overlay surface created");
        Ok(OverlaySurface::new(webview, kind))
    }
}
