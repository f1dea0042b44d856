use tracing::{debug, warn};
use wry::WebView;

use crate::events::{EventSink, SurfaceEvent};
use crate::history::{NavigationHistory, NavigationState};
use crate::ipc::{js_fade_in, js_scroll_to};

use super::{BrowserSurface, SurfaceError};

/// Error code for navigation commands the engine refused.
pub const ERROR_UNKNOWN: i32 = -1;

/// The content surface: the one webview showing the destination site.
pub struct ContentSurface {
    pub(super) webview: WebView,
    pub(super) events: EventSink,
    pub(super) history: NavigationHistory,
    pub(super) scroll_y: f64,
    pub(super) pending_scroll: Option<f64>,
    pub(super) title: String,
}

impl ContentSurface {
    pub(super) fn new(webview: WebView, events: EventSink, initial_url: &str) -> Self {
        Self {
            webview,
            events,
            history: NavigationHistory::starting_at(initial_url),
            scroll_y: 0.0,
            pending_scroll: None,
            title: String::new(),
        }
    }

    /// Current document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the surface bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), SurfaceError> {
        Ok(self.webview.set_bounds(bounds)?)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        Ok(self.webview.set_visible(visible)?)
    }

    /// Fade the current document in over `fade_ms`. Zero shows it at once.
    pub fn fade_in(&self, fade_ms: u32) -> Result<(), SurfaceError> {
        if fade_ms == 0 {
            return Ok(());
        }
        Ok(self.webview.evaluate_script(&js_fade_in(fade_ms))?)
    }

    pub fn focus(&self) -> Result<(), SurfaceError> {
        Ok(self.webview.focus()?)
    }

    /// Issue a navigation. A refused command is reported as a `PageError`
    /// so the loading indicator settles like for any other failure.
    fn navigate(&self, url: &str) -> Result<(), SurfaceError> {
        if let Err(e) = self.webview.load_url(url) {
            warn!(url, error = %e, "navigation command failed");
            self.events
                .push(SurfaceEvent::error(ERROR_UNKNOWN, e.to_string(), url));
            return Err(e.into());
        }
        Ok(())
    }
}

impl BrowserSurface for ContentSurface {
    fn current_url(&self) -> Option<&str> {
        self.history.current()
    }

    /// Reload by re-issuing the current URL through the engine, so it also
    /// works on documents without the bridge script (engine error pages).
    fn reload(&mut self) -> Result<(), SurfaceError> {
        let target = match self.history.current() {
            Some(url) => url.to_string(),
            None => self.webview.url()?,
        };
        debug!(url = %target, "reload");
        self.history.mark_reload();
        self.navigate(&target)
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        let Some(target) = self.history.go_back().map(str::to_string) else {
            return Ok(());
        };
        debug!(url = %target, "back");
        self.navigate(&target)
    }

    fn save_state(&self) -> Option<String> {
        self.history
            .to_state(self.scroll_y)
            .map(|state| state.encode())
    }

    fn restore_state(&mut self, blob: &str) -> Result<(), SurfaceError> {
        let state = NavigationState::decode(blob)?;
        self.history = NavigationHistory::from_state(&state);
        self.pending_scroll = Some(state.scroll_y);
        debug!(
            url = %state.current(),
            entries = state.entries.len(),
            "restoring navigation state"
        );
        self.navigate(state.current())
    }

    fn observe(&mut self, event: &SurfaceEvent) {
        match event {
            SurfaceEvent::PageFinished { url } => {
                self.history.record(url);
                self.scroll_y = 0.0;
                if let Some(y) = self.pending_scroll.take() {
                    if y > 0.0 {
                        if let Err(e) = self.webview.evaluate_script(&js_scroll_to(y)) {
                            warn!(error = %e, "failed to restore scroll position");
                        }
                        self.scroll_y = y;
                    }
                }
            }
            SurfaceEvent::LocationChanged { url } => self.history.record(url),
            SurfaceEvent::HistoryTraversed { url } => self.history.traverse(url),
            SurfaceEvent::LocationReplaced { url } => self.history.replace_current(url),
            SurfaceEvent::Scrolled { y } => self.scroll_y = *y,
            SurfaceEvent::TitleChanged { title } => self.title = title.clone(),
            _ => {}
        }
    }
}
