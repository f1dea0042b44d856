/// HTTP cache policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Engine default: use the cache when valid, otherwise the network.
    #[default]
    Default,
    /// Always go to the network.
    NoCache,
}

/// Whether an HTTPS page may load HTTP subresources and navigate to HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixedContentMode {
    #[default]
    AlwaysAllow,
    NeverAllow,
}

/// Configuration applied when the content surface is built.
///
/// Options `wry` exposes map onto the builder directly. Viewport handling is
/// done by the bridge script and the mixed content policy by the navigation
/// handler. The engines `wry` embeds cannot turn script execution off, so
/// `javascript = false` is only reported; `local_storage = false` maps to an
/// incognito surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSettings {
    pub javascript: bool,
    pub local_storage: bool,
    pub cache_mode: CacheMode,
    /// Pinch and keyboard zoom.
    pub zoom: bool,
    /// On-screen zoom buttons. Never drawn by the shell.
    pub display_zoom_controls: bool,
    pub wide_viewport: bool,
    pub mixed_content: MixedContentMode,
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Pull distance in pixels that arms pull-to-refresh.
    pub pull_threshold: u32,
}

impl SurfaceSettings {
    /// The fixed configuration of the shell's content surface.
    pub fn content_defaults() -> Self {
        Self {
            javascript: true,
            local_storage: true,
            cache_mode: CacheMode::Default,
            zoom: true,
            display_zoom_controls: false,
            wide_viewport: true,
            mixed_content: MixedContentMode::AlwaysAllow,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            pull_threshold: 80,
        }
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_pull_threshold(mut self, pull_threshold: u32) -> Self {
        self.pull_threshold = pull_threshold;
        self
    }

    /// Whether the surface runs without persistent storage.
    pub fn incognito(&self) -> bool {
        !self.local_storage || self.cache_mode == CacheMode::NoCache
    }
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self::content_defaults()
    }
}
