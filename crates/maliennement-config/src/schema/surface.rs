//! Content surface tuning that is safe to expose.

use serde::{Deserialize, Serialize};

/// Content surface options.
///
/// Script execution, storage, zoom and mixed-content policy are fixed by the
/// shell and intentionally not listed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Enable the web inspector (always on in debug builds).
    pub devtools: bool,
    /// Override the engine's default user agent.
    pub user_agent: Option<String>,
    /// Pull distance in pixels that arms pull-to-refresh (valid range: 20-400).
    pub pull_threshold: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            pull_threshold: 80,
        }
    }
}
