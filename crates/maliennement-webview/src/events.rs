//! Surface event types.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the content surface.
///
/// Engine callbacks and bridge-script IPC messages both end up here; the
/// event loop drains them and feeds the content host.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A main-frame navigation started.
    PageStarted { url: String },
    /// A main-frame navigation finished.
    PageFinished { url: String },
    /// Load progress, 0-100.
    Progress { percent: u8 },
    /// A navigation failed. Every failure looks the same to the shell.
    PageError {
        code: i32,
        description: String,
        failing_url: String,
    },
    /// Document title changed.
    TitleChanged { title: String },
    /// Same-document navigation to a new entry (`pushState`).
    LocationChanged { url: String },
    /// The page moved through its own history (`popstate`).
    HistoryTraversed { url: String },
    /// The page rewrote its current URL (`replaceState`).
    LocationReplaced { url: String },
    /// Page scroll offset, throttled.
    Scrolled { y: f64 },
    /// Pull-to-refresh armed (drag past the threshold at scroll top).
    PullStarted,
    /// Pull-to-refresh released.
    PullReleased,
    /// Refresh key pressed inside the page.
    RefreshRequested,
    /// Back key/button pressed inside the page.
    BackRequested,
}

impl SurfaceEvent {
    /// Build a `PageError`.
    pub fn error(code: i32, description: impl Into<String>, failing_url: impl Into<String>) -> Self {
        Self::PageError {
            code,
            description: description.into(),
            failing_url: failing_url.into(),
        }
    }
}

/// Shared queue that engine callbacks push into and the event loop drains.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: SurfaceEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<SurfaceEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}
