use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{EventSink, PageLoadState, SurfaceEvent};
use crate::ipc::parse_bridge_message;

use super::settings::MixedContentMode;
use super::SurfaceManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Whether the content surface may navigate to `url`.
///
/// Web pages stay inside the surface: `https` always, `http` when mixed
/// content is allowed, and `about:blank`. Every other scheme (`file:`,
/// `javascript:`, `data:`, custom schemes) is blocked.
pub fn is_navigation_allowed(url: &str, mixed_content: MixedContentMode) -> bool {
    let url = url.trim();
    if url.starts_with("https://") || url == "about:blank" {
        return true;
    }
    url.starts_with("http://") && mixed_content == MixedContentMode::AlwaysAllow
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl SurfaceManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();
            match parse_bridge_message(body) {
                Some(event) => events.push(event),
                None => debug!(body_len = body.len(), "bridge message ignored"),
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            events.push(match state {
                PageLoadState::Started => SurfaceEvent::PageStarted { url },
                PageLoadState::Finished => SurfaceEvent::PageFinished { url },
            });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            events.push(SurfaceEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler(
        builder: WebViewBuilder<'_>,
        mixed_content: MixedContentMode,
    ) -> WebViewBuilder<'_> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(&url, mixed_content) {
                true
            } else {
                warn!(url = %url, "navigation blocked: scheme not allowed");
                false
            }
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_https_anywhere() {
        let mode = MixedContentMode::AlwaysAllow;
        assert!(is_navigation_allowed("https://www.maliennement.com/", mode));
        assert!(is_navigation_allowed("https://cdn.example.org/x.js", mode));
        assert!(is_navigation_allowed(
            "https://www.maliennement.com/",
            MixedContentMode::NeverAllow
        ));
    }

    #[test]
    fn http_follows_mixed_content_mode() {
        assert!(is_navigation_allowed(
            "http://www.maliennement.com/",
            MixedContentMode::AlwaysAllow
        ));
        assert!(!is_navigation_allowed(
            "http://www.maliennement.com/",
            MixedContentMode::NeverAllow
        ));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank", MixedContentMode::NeverAllow));
    }

    #[test]
    fn blocks_local_and_script_schemes() {
        let mode = MixedContentMode::AlwaysAllow;
        assert!(!is_navigation_allowed("file:///etc/passwd", mode));
        assert!(!is_navigation_allowed("javascript:alert(1)", mode));
        assert!(!is_navigation_allowed("data:text/html,<h1>x</h1>", mode));
        assert!(!is_navigation_allowed("ftp://files.example.com", mode));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        let mode = MixedContentMode::AlwaysAllow;
        assert!(!is_navigation_allowed("", mode));
        assert!(!is_navigation_allowed("   ", mode));
        assert!(!is_navigation_allowed("not-a-url", mode));
        assert!(!is_navigation_allowed("httpx://evil", mode));
    }
}
