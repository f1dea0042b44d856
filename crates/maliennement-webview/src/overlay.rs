//! Overlay surfaces drawn above the content surface.
//!
//! The splash panel and the loading indicator are small inline-HTML
//! webviews. Their look lives here; when they are shown is decided by the
//! shell's render step.

use maliennement_common::Color;
use tracing::warn;
use wry::WebView;

use crate::surface::SurfaceError;

/// Edge length of the loading indicator overlay, in logical pixels.
pub const INDICATOR_SIZE: f64 = 56.0;

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayKind {
    /// Full-window branded panel with a centered headline.
    Splash {
        title: String,
        background: Color,
        text_color: Color,
        fade_ms: u32,
    },
    /// Circular progress spinner on a transparent background.
    Indicator { color: Color },
}

impl OverlayKind {
    /// Inline document for this overlay.
    pub fn html(&self) -> String {
        match self {
            OverlayKind::Splash {
                title,
                background,
                text_color,
                fade_ms,
            } => format!(
                r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><style>
html, body {{ margin: 0; height: 100%; background: transparent; overflow: hidden; }}
.panel {{
  height: 100%; display: flex; align-items: center; justify-content: center;
  background: {bg}; color: {fg};
  font: 600 32px/1.25 system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  text-align: center; opacity: 1; transition: opacity {fade_ms}ms ease-out;
}}
body.fade-out .panel {{ opacity: 0; }}
</style></head>
<body><div class="panel"><h1 style="font: inherit; margin: 0 24px;">{title}</h1></div></body></html>"#,
                bg = background.to_css(),
                fg = text_color.to_css(),
                title = escape_html(title),
            ),
            OverlayKind::Indicator { color } => format!(
                r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><style>
html, body {{ margin: 0; height: 100%; background: transparent; overflow: hidden; }}
body {{ display: flex; align-items: center; justify-content: center; }}
.spinner {{
  width: 40px; height: 40px; box-sizing: border-box;
  border: 4px solid transparent; border-top-color: {fg}; border-radius: 50%;
  animation: spin 0.9s linear infinite;
}}
@keyframes spin {{ to {{ transform: rotate(360deg); }} }}
</style></head>
<body><div class="spinner" role="progressbar"></div></body></html>"#,
                fg = color.to_css(),
            ),
        }
    }
}

/// Script starting the splash fade-out transition.
pub const JS_FADE_OUT: &str = "document.body.classList.add('fade-out');";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A live overlay webview.
pub struct OverlaySurface {
    webview: WebView,
    kind: OverlayKind,
    visible: bool,
}

impl OverlaySurface {
    pub(crate) fn new(webview: WebView, kind: OverlayKind) -> Self {
        Self {
            webview,
            kind,
            visible: true,
        }
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), SurfaceError> {
        Ok(self.webview.set_bounds(bounds)?)
    }

    /// Show or hide; repeated calls with the same value are skipped.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        match self.webview.set_visible(visible) {
            Ok(()) => self.visible = visible,
            Err(e) => warn!(kind = ?self.kind, error = %e, "failed to toggle overlay"),
        }
    }

    /// Start the CSS fade-out. The caller drops the overlay once the fade
    /// has had time to finish.
    pub fn fade_out(&self) {
        if let Err(e) = self.webview.evaluate_script(JS_FADE_OUT) {
            warn!(error = %e, "failed to start overlay fade-out");
        }
    }
}
