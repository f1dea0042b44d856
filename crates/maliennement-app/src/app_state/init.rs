//! Window creation, splash overlay and content mount.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use maliennement_common::{Color, Rect};
use maliennement_config::colors::parse_color;
use maliennement_config::schema::SplashConfig;
use maliennement_webview::bounds::to_wry_rect;
use maliennement_webview::overlay::INDICATOR_SIZE;
use maliennement_webview::OverlayKind;

use crate::content::DESTINATION_URL;
use crate::splash::{SplashController, SPLASH_DELAY};

use super::core::ShellApp;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Used when a configured splash color does not parse.
const FALLBACK_BACKGROUND: Color = Color::from_rgba(0x66, 0x50, 0xa4, 255);

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ShellApp {
    /// Create the window and put the splash panel on it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_resizable(window_config.resizable)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let viewport = logical_viewport(&window);
        match self.surfaces.create_overlay(
            window.as_ref(),
            to_wry_rect(&viewport),
            splash_overlay_kind(&self.config.splash),
        ) {
            Ok(overlay) => self.splash_overlay = Some(overlay),
            Err(e) => tracing::warn!(error = %e, "Failed to create splash overlay"),
        }

        self.splash = Some(SplashController::new(SPLASH_DELAY));
        self.window = Some(window);
        tracing::info!("Window created, splash shown");
        true
    }

    /// Build the content surface beneath the splash, then the loading
    /// indicator above it, then apply any saved navigation state.
    ///
    /// The content stays hidden until the splash starts fading out.
    pub(super) fn mount_content(&mut self) {
        let Some(window) = self.window.clone() else {
            tracing::warn!("Cannot mount content: no window");
            return;
        };
        let viewport = logical_viewport(&window);

        match self
            .surfaces
            .create_content(window.as_ref(), to_wry_rect(&viewport), DESTINATION_URL)
        {
            Ok(surface) => {
                if let Err(e) = surface.set_visible(false) {
                    tracing::warn!(error = %e, "Failed to hide content during cross-fade");
                }
                if let Err(e) = self.host.mount(surface) {
                    tracing::error!(error = %e, "Content mount refused");
                    return;
                }
                tracing::info!(url = DESTINATION_URL, "Content surface mounted");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create content surface");
                return;
            }
        }

        let indicator_kind = OverlayKind::Indicator {
            color: parse_color(&self.config.splash.background).unwrap_or(FALLBACK_BACKGROUND),
        };
        match self.surfaces.create_overlay(
            window.as_ref(),
            to_wry_rect(&viewport.centered_square(INDICATOR_SIZE)),
            indicator_kind,
        ) {
            Ok(mut indicator) => {
                indicator.set_visible(false);
                self.indicator = Some(indicator);
            }
            Err(e) => tracing::warn!(error = %e, "Failed to create loading indicator"),
        }

        self.restore_session();
    }

    /// Resize every surface to the current window size.
    pub(super) fn sync_surface_bounds(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let viewport = logical_viewport(window);
        // Minimized windows report a zero size; keep the last layout.
        if viewport.is_empty() {
            return;
        }
        let full = to_wry_rect(&viewport);

        if let Some(overlay) = &self.splash_overlay {
            if let Err(e) = overlay.set_bounds(full) {
                tracing::warn!(error = %e, "Failed to resize splash overlay");
            }
        }
        if let Some(surface) = self.host.surface() {
            if let Err(e) = surface.set_bounds(full) {
                tracing::warn!(error = %e, "Failed to resize content surface");
            }
        }
        if let Some(indicator) = &self.indicator {
            let bounds = to_wry_rect(&viewport.centered_square(INDICATOR_SIZE));
            if let Err(e) = indicator.set_bounds(bounds) {
                tracing::warn!(error = %e, "Failed to move loading indicator");
            }
        }
    }
}

/// Window client area in logical pixels.
fn logical_viewport(window: &Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect::from_size(size.width, size.height)
}

/// Splash overlay look from config, falling back to the brand colors when
/// a color does not parse.
fn splash_overlay_kind(config: &SplashConfig) -> OverlayKind {
    OverlayKind::Splash {
        title: config.title.clone(),
        background: parse_color(&config.background).unwrap_or(FALLBACK_BACKGROUND),
        text_color: parse_color(&config.text_color).unwrap_or(Color::WHITE),
        fade_ms: config.fade_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_kind_uses_config_colors() {
        let config = SplashConfig {
            title: "Bienvenue".into(),
            background: "#102030".into(),
            text_color: "#fff".into(),
            fade_ms: 150,
        };
        assert_eq!(
            splash_overlay_kind(&config),
            OverlayKind::Splash {
                title: "Bienvenue".into(),
                background: Color::from_rgba(0x10, 0x20, 0x30, 255),
                text_color: Color::WHITE,
                fade_ms: 150,
            }
        );
    }

    #[test]
    fn splash_kind_falls_back_on_bad_colors() {
        let config = SplashConfig {
            background: "purple".into(),
            text_color: "#12".into(),
            ..SplashConfig::default()
        };
        match splash_overlay_kind(&config) {
            OverlayKind::Splash {
                background,
                text_color,
                ..
            } => {
                assert_eq!(background, FALLBACK_BACKGROUND);
                assert_eq!(text_color, Color::WHITE);
            }
            other => panic!("expected splash overlay, got {other:?}"),
        }
    }

    #[test]
    fn default_splash_matches_brand() {
        match splash_overlay_kind(&SplashConfig::default()) {
            OverlayKind::Splash {
                title, background, ..
            } => {
                assert_eq!(title, "Maliennement");
                assert_eq!(background, FALLBACK_BACKGROUND);
            }
            other => panic!("expected splash overlay, got {other:?}"),
        }
    }
}
