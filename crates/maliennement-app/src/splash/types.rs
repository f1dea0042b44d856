//! Splash phase definitions.

use std::time::Duration;

/// How long the splash stays up after mount. Fixed, not configurable.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Branded panel on screen, content not built yet.
    Visible,
    /// Delay elapsed. Terminal.
    Dismissed,
}
