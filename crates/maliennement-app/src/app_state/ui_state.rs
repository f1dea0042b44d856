//! Store updates and applying rendered frames to the surfaces.

use crate::ui::{render, ContentLayer, Frame, SplashLayer};

use super::core::ShellApp;

impl ShellApp {
    /// Copy the splash and host flags into the store.
    pub(super) fn sync_store(&mut self) {
        let splash_visible = self.splash.as_ref().map_or(true, |s| s.is_visible());
        let content_mounted = self.host.is_ready();
        let loading = self.host.loading();
        let refreshing = self.host.is_refreshing();

        self.store.update(|state| {
            state.splash_visible = splash_visible;
            state.content_mounted = content_mounted;
            state.loading = loading;
            state.refreshing = refreshing;
        });
    }

    /// Render and apply the UI state if it changed since last time.
    pub(super) fn apply_dirty_frame(&mut self) {
        let Some(state) = self.store.take_dirty().copied() else {
            return;
        };
        let frame = render(&state);
        tracing::debug!(revision = self.store.revision(), ?frame, "Applying frame");
        self.apply_frame(frame);
    }

    pub(super) fn apply_frame(&mut self, frame: Frame) {
        if frame.splash == SplashLayer::FadingOut {
            self.begin_splash_fade();
        }

        if frame.content == ContentLayer::FadingIn && !self.content_revealed {
            self.reveal_content();
        }

        let splash_gone = self.splash_overlay.is_none();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.set_visible(frame.indicator_visible && splash_gone);
        }
    }

    /// Destroy the faded splash overlay and hand focus to the content.
    pub(super) fn finish_splash_fade(&mut self) {
        self.splash_overlay = None;
        self.splash_fade_until = None;
        tracing::debug!("Splash overlay removed");
        if let Some(surface) = self.host.surface() {
            if let Err(e) = surface.focus() {
                tracing::debug!(error = %e, "Failed to focus content surface");
            }
        }
        let frame = render(self.store.get());
        self.apply_frame(frame);
    }

    /// Show the content beneath the fading splash and fade it in over the
    /// same duration. Without a splash overlay it appears at once.
    fn reveal_content(&mut self) {
        let Some(surface) = self.host.surface() else {
            return;
        };
        let fade_ms = if self.splash_overlay.is_some() {
            self.config.splash.fade_ms
        } else {
            0
        };
        if let Err(e) = surface.fade_in(fade_ms) {
            tracing::debug!(error = %e, "Failed to start content fade-in");
        }
        if let Err(e) = surface.set_visible(true) {
            tracing::warn!(error = %e, "Failed to show content surface");
            return;
        }
        if fade_ms == 0 {
            if let Err(e) = surface.focus() {
                tracing::debug!(error = %e, "Failed to focus content surface");
            }
        }
        self.content_revealed = true;
    }
}
