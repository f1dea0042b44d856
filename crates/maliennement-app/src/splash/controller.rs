//! One-shot splash timer.

use std::time::{Duration, Instant};

use super::types::SplashPhase;

/// Tracks the splash delay from mount.
///
/// There is no cancel or restart: dropping the controller before expiry
/// simply abandons the timer.
#[derive(Debug)]
pub struct SplashController {
    mounted_at: Instant,
    delay: Duration,
    phase: SplashPhase,
}

impl SplashController {
    /// Start the timer now.
    pub fn new(delay: Duration) -> Self {
        Self::starting_at(Instant::now(), delay)
    }

    pub fn starting_at(mounted_at: Instant, delay: Duration) -> Self {
        Self {
            mounted_at,
            delay,
            phase: SplashPhase::Visible,
        }
    }

    /// When the splash is due to go away.
    pub fn fire_at(&self) -> Instant {
        self.mounted_at + self.delay
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == SplashPhase::Visible
    }

    /// Advance the timer. Returns `true` on the single call that dismisses
    /// the splash.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.phase == SplashPhase::Visible && now >= self.fire_at() {
            self.phase = SplashPhase::Dismissed;
            return true;
        }
        false
    }
}
