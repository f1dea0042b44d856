//! Graceful shutdown: destroy overlays and the content surface.

use super::core::ShellApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ShellApp {
    /// Drop every webview while the window is still alive.
    ///
    /// Overlays go first, then the content surface, then the splash timer.
    /// Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.indicator = None;
        self.splash_overlay = None;
        self.splash_fade_until = None;

        if self.host.unmount().is_some() {
            tracing::debug!("Content surface destroyed");
        }
        self.content_revealed = false;

        self.splash = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
