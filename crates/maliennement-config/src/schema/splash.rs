//! Splash panel appearance.

use serde::{Deserialize, Serialize};

/// Branded splash panel shown before the content surface.
///
/// The splash delay itself is fixed by the shell; only the look and the
/// cross-fade length are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Headline text centered on the panel.
    pub title: String,
    /// Panel background (hex).
    pub background: String,
    /// Headline color (hex).
    pub text_color: String,
    /// Cross-fade length in milliseconds (valid range: 0-2000).
    pub fade_ms: u32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            title: "Maliennement".into(),
            background: "#6650a4".into(),
            text_color: "#ffffff".into(),
            fade_ms: 300,
        }
    }
}
