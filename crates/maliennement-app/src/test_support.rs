//! In-memory browser surface for host and bridge tests.

use maliennement_webview::{
    BrowserSurface, NavigationHistory, NavigationState, SurfaceError, SurfaceEvent,
};

use crate::content::DESTINATION_URL;

pub const HOME: &str = "https://www.maliennement.com/";
pub const ARTICLE: &str = "https://www.maliennement.com/articles/bamako";
pub const GALLERY: &str = "https://www.maliennement.com/galerie";

/// Records every command it receives and keeps history like the real
/// surface does.
#[derive(Debug)]
pub struct FakeSurface {
    pub history: NavigationHistory,
    pub scroll_y: f64,
    pub reloads: usize,
    pub loads: Vec<String>,
    pub fail_reload: bool,
}

impl FakeSurface {
    /// A surface that has just been asked to load the destination.
    pub fn new() -> Self {
        Self {
            history: NavigationHistory::starting_at(DESTINATION_URL),
            scroll_y: 0.0,
            reloads: 0,
            loads: vec![DESTINATION_URL.to_string()],
            fail_reload: false,
        }
    }

    /// A surface that committed `urls` in order.
    pub fn visited(urls: &[&str]) -> Self {
        let mut surface = Self::new();
        for url in urls {
            surface.observe(&finished(url));
        }
        surface
    }
}

impl BrowserSurface for FakeSurface {
    fn current_url(&self) -> Option<&str> {
        self.history.current()
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        if self.fail_reload {
            return Err(SurfaceError::InvalidState("engine gone".into()));
        }
        self.reloads += 1;
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        if let Some(url) = self.history.go_back().map(str::to_string) {
            self.loads.push(url);
        }
        Ok(())
    }

    fn save_state(&self) -> Option<String> {
        self.history.to_state(self.scroll_y).map(|s| s.encode())
    }

    fn restore_state(&mut self, blob: &str) -> Result<(), SurfaceError> {
        let state = NavigationState::decode(blob)?;
        self.history = NavigationHistory::from_state(&state);
        self.scroll_y = state.scroll_y;
        self.loads.push(state.current().to_string());
        Ok(())
    }

    fn observe(&mut self, event: &SurfaceEvent) {
        match event {
            SurfaceEvent::PageFinished { url } | SurfaceEvent::LocationChanged { url } => {
                self.history.record(url)
            }
            SurfaceEvent::HistoryTraversed { url } => self.history.traverse(url),
            SurfaceEvent::LocationReplaced { url } => self.history.replace_current(url),
            SurfaceEvent::Scrolled { y } => self.scroll_y = *y,
            _ => {}
        }
    }
}

pub fn finished(url: &str) -> SurfaceEvent {
    SurfaceEvent::PageFinished {
        url: url.to_string(),
    }
}
