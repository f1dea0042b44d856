//! Per-iteration work: splash timer, surface events, and the next wake-up.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use maliennement_webview::SurfaceEvent;

use crate::content::BackOutcome;

use super::core::ShellApp;
use super::types::POLL_INTERVAL;

impl ShellApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.poll_splash(now);
        self.poll_splash_fade(now);
        self.poll_surface_events(event_loop);
        self.sync_store();
        self.apply_dirty_frame();

        let mut wake = now + POLL_INTERVAL;
        if let Some(splash) = self.splash.as_ref().filter(|s| s.is_visible()) {
            wake = wake.min(splash.fire_at());
        }
        if let Some(fade_end) = self.splash_fade_until {
            wake = wake.min(fade_end);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    /// Fire the splash timer: mount content beneath the splash.
    fn poll_splash(&mut self, now: Instant) {
        let Some(splash) = self.splash.as_mut() else {
            return;
        };
        if splash.poll(now) {
            tracing::info!(phase = ?splash.phase(), "Splash delay elapsed");
            self.mount_content();
        }
    }

    /// Drop the splash overlay once its fade-out has run.
    fn poll_splash_fade(&mut self, now: Instant) {
        if self.splash_fade_until.is_some_and(|end| now >= end) {
            self.finish_splash_fade();
        }
    }

    /// Start the splash fade-out. With a zero fade the overlay goes at the
    /// next poll.
    pub(super) fn begin_splash_fade(&mut self) {
        if self.splash_fade_until.is_some() {
            return;
        }
        if let Some(overlay) = &self.splash_overlay {
            overlay.fade_out();
            let fade = Duration::from_millis(u64::from(self.config.splash.fade_ms));
            self.splash_fade_until = Some(Instant::now() + fade);
        }
    }

    fn poll_surface_events(&mut self, event_loop: &ActiveEventLoop) {
        for event in self.surfaces.drain_events() {
            match &event {
                SurfaceEvent::BackRequested => self.handle_back(event_loop),
                SurfaceEvent::TitleChanged { .. } => {
                    self.host.handle_event(&event);
                    let title = self
                        .host
                        .surface()
                        .map(|s| s.title().to_string())
                        .unwrap_or_default();
                    self.update_window_title(&title);
                }
                _ => self.host.handle_event(&event),
            }
        }
    }

    /// Route a back action through the lifecycle dispatcher.
    pub(super) fn handle_back(&mut self, event_loop: &ActiveEventLoop) {
        match self.lifecycle.back(&mut self.host) {
            BackOutcome::NavigatedBack => tracing::debug!("Back navigation consumed"),
            BackOutcome::Exit => {
                tracing::info!("Back with no history, exiting");
                self.clear_session();
                self.shutdown();
                event_loop.exit();
            }
        }
    }

    fn update_window_title(&self, page_title: &str) {
        let Some(window) = &self.window else {
            return;
        };
        let app_title = &self.config.window.title;
        if page_title.trim().is_empty() || page_title == app_title {
            window.set_title(app_title);
        } else {
            window.set_title(&format!("{page_title} - {app_title}"));
        }
    }
}
