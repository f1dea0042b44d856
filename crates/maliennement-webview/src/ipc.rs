//! IPC between the content page and the shell.
//!
//! - **JS -> Rust**: the bridge script calls
//!   `window.ipc.postMessage(JSON.stringify({kind, payload}))`, which reaches
//!   the surface's `ipc_handler` and is parsed here into a [`SurfaceEvent`].
//! - **Rust -> JS**: the shell calls `evaluate_script` with snippets built by
//!   the helpers at the bottom of this module.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::events::SurfaceEvent;

/// Message kinds the bridge script may send. Anything else is dropped.
pub const ALLOWED_BRIDGE_KINDS: &[&str] = &[
    "progress",
    "offline",
    "scroll",
    "location",
    "popstate",
    "replace",
    "pull_start",
    "pull_release",
    "refresh",
    "back",
];

/// Error code reported when the page loaded while the engine was offline.
pub const ERROR_HOST_LOOKUP: i32 = -2;

/// A raw message from the bridge script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl BridgeMessage {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Convert into a surface event, or `None` for unknown kinds and
    /// malformed payloads.
    pub fn into_event(self) -> Option<SurfaceEvent> {
        if !ALLOWED_BRIDGE_KINDS.contains(&self.kind.as_str()) {
            warn!(kind = %self.kind, "bridge message rejected: unknown kind");
            return None;
        }

        let event = match self.kind.as_str() {
            "progress" => {
                let percent = self.payload.as_u64()?.min(100) as u8;
                SurfaceEvent::Progress { percent }
            }
            "offline" => {
                let url = self.payload.as_str().unwrap_or_default();
                SurfaceEvent::error(ERROR_HOST_LOOKUP, "network unavailable", url)
            }
            "scroll" => SurfaceEvent::Scrolled {
                y: self.payload.as_f64()?.max(0.0),
            },
            "location" => SurfaceEvent::LocationChanged {
                url: self.payload.as_str()?.to_string(),
            },
            "popstate" => SurfaceEvent::HistoryTraversed {
                url: self.payload.as_str()?.to_string(),
            },
            "replace" => SurfaceEvent::LocationReplaced {
                url: self.payload.as_str()?.to_string(),
            },
            "pull_start" => SurfaceEvent::PullStarted,
            "pull_release" => SurfaceEvent::PullReleased,
            "refresh" => SurfaceEvent::RefreshRequested,
            "back" => SurfaceEvent::BackRequested,
            _ => return None,
        };
        Some(event)
    }
}

/// Parse a raw IPC body straight into a surface event.
pub fn parse_bridge_message(raw: &str) -> Option<SurfaceEvent> {
    BridgeMessage::from_json(raw)?.into_event()
}

/// The initialization script injected into every content page.
///
/// Reports ready-state progress, offline loads, throttled scroll offsets and
/// same-document navigations; adds a viewport meta tag when the page lacks
/// one; turns a downward touch drag at scroll top longer than
/// `pull_threshold` pixels into `pull_start` / `pull_release`; forwards the
/// back and refresh keys.
pub fn bridge_script(pull_threshold: u32) -> String {
    BRIDGE_SCRIPT_TEMPLATE.replace("__PULL_THRESHOLD__", &pull_threshold.to_string())
}

const BRIDGE_SCRIPT_TEMPLATE: &str = r#"
(function() {
    if (window.__maliennementBridge) { return; }
    window.__maliennementBridge = true;

    function send(kind, payload) {
        try {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        } catch (e) {}
    }

    function reportProgress() {
        var state = document.readyState;
        send('progress', state === 'loading' ? 10 : state === 'interactive' ? 70 : 100);
    }
    reportProgress();
    document.addEventListener('readystatechange', reportProgress);

    document.addEventListener('DOMContentLoaded', function() {
        if (!document.querySelector('meta[name="viewport"]') && document.head) {
            var meta = document.createElement('meta');
            meta.name = 'viewport';
            meta.content = 'width=device-width, initial-scale=1, viewport-fit=cover';
            document.head.appendChild(meta);
        }
        if (navigator.onLine === false) {
            send('offline', location.href);
        }
    });

    var scrollTimer = null;
    window.addEventListener('scroll', function() {
        if (scrollTimer) { return; }
        scrollTimer = setTimeout(function() {
            scrollTimer = null;
            send('scroll', window.scrollY);
        }, 250);
    }, { passive: true });

    var pushState = history.pushState;
    history.pushState = function() {
        var result = pushState.apply(this, arguments);
        send('location', location.href);
        return result;
    };
    var replaceState = history.replaceState;
    history.replaceState = function() {
        var result = replaceState.apply(this, arguments);
        send('replace', location.href);
        return result;
    };
    window.addEventListener('popstate', function() {
        send('popstate', location.href);
    });

    var PULL_THRESHOLD = __PULL_THRESHOLD__;
    var pullStartY = null;
    var pullArmed = false;
    window.addEventListener('touchstart', function(e) {
        if (window.scrollY <= 0 && e.touches.length === 1) {
            pullStartY = e.touches[0].clientY;
        }
    }, { passive: true });
    window.addEventListener('touchmove', function(e) {
        if (pullStartY === null || pullArmed) { return; }
        if (e.touches[0].clientY - pullStartY > PULL_THRESHOLD) {
            pullArmed = true;
            send('pull_start');
        }
    }, { passive: true });
    window.addEventListener('touchend', function() {
        if (pullArmed) { send('pull_release'); }
        pullStartY = null;
        pullArmed = false;
    });

    window.addEventListener('keydown', function(e) {
        var back = e.key === 'BrowserBack' || (e.altKey && e.key === 'ArrowLeft');
        var refresh = e.key === 'F5' || ((e.ctrlKey || e.metaKey) && (e.key === 'r' || e.key === 'R'));
        if (back) { e.preventDefault(); send('back'); }
        else if (refresh) { e.preventDefault(); send('refresh'); }
    });
    window.addEventListener('mouseup', function(e) {
        if (e.button === 3) { e.preventDefault(); send('back'); }
    });
})();
"#;

/// Script restoring a saved vertical scroll offset.
pub fn js_scroll_to(y: f64) -> String {
    let y = if y.is_finite() { y.max(0.0) } else { 0.0 };
    format!("window.scrollTo(0, {y});")
}


/// Script fading the whole document in from transparent over `fade_ms`.
/// The inline styles are removed once the transition has run.
pub fn js_fade_in(fade_ms: u32) -> String {
    format!(
        "(function() {{\
var root = document.documentElement; if (!root) {{ return; }}\
var style = root.style;\
style.transition = 'none'; style.opacity = '0';\
void root.offsetWidth;\
style.transition = 'opacity {fade_ms}ms ease-in'; style.opacity = '1';\
setTimeout(function() {{ style.transition = ''; style.opacity = ''; }}, {cleanup});\
}})();",
        cleanup = u64::from(fade_ms) + 50,
    )
}
