//! ShellApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use maliennement_config::ShellConfig;
use maliennement_platform::SavedStateStore;
use maliennement_webview::{ContentSurface, OverlaySurface, SurfaceManager, SurfaceSettings};

use crate::content::ContentHost;
use crate::lifecycle::{LifecycleCallbacks, LifecycleDispatcher};
use crate::splash::SplashController;
use crate::ui::{Store, UiState};

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,
    pub(super) surfaces: SurfaceManager,

    // Splash panel and its timer
    pub(super) splash: Option<SplashController>,
    pub(super) splash_overlay: Option<OverlaySurface>,
    pub(super) splash_fade_until: Option<Instant>,

    // Content surface and the bridges reading it
    pub(super) host: ContentHost<ContentSurface>,
    pub(super) lifecycle: LifecycleDispatcher<ContentSurface>,
    pub(super) content_revealed: bool,
    pub(super) indicator: Option<OverlaySurface>,

    // Observable UI state
    pub(super) store: Store<UiState>,

    // Where navigation state survives restarts; `None` when unavailable
    pub(super) saved_state: Option<SavedStateStore>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Declared last so every webview above is dropped before it
    pub(super) window: Option<Arc<Window>>,
}

impl ShellApp {
    pub fn new(config: ShellConfig, saved_state: Option<SavedStateStore>) -> Self {
        let settings = SurfaceSettings::content_defaults()
            .with_devtools(config.surface.devtools)
            .with_user_agent(config.surface.user_agent.clone())
            .with_pull_threshold(config.surface.pull_threshold);

        let mut lifecycle = LifecycleDispatcher::new();
        lifecycle.register(LifecycleCallbacks::content_bridges());

        Self {
            config,
            surfaces: SurfaceManager::new(settings),
            splash: None,
            splash_overlay: None,
            splash_fade_until: None,
            host: ContentHost::new(),
            lifecycle,
            content_revealed: false,
            indicator: None,
            store: Store::new(UiState::default()),
            saved_state,
            modifiers: winit::keyboard::ModifiersState::empty(),
            window: None,
        }
    }
}
